use serde_json::{Map, Value};

use crate::model::Extensions;

/// Whether a key is an extension key (`x-...`).
///
/// Matches keys starting with `x` (either case) or `-`.
pub fn is_extension_key(key: &str) -> bool {
    key.starts_with(['x', 'X', '-'])
}

/// Extract all extension keys from an object, preserving their order.
pub fn extract_extensions(obj: &Map<String, Value>) -> Extensions {
    obj.iter()
        .filter(|(k, _)| is_extension_key(k))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}
