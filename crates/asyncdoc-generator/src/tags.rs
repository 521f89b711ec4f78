//! Tag and external documentation builders.

use serde_json::{Map, Value};
use tracing::debug;

use crate::extensions::extract_extensions;
use crate::fields::{object, text};
use crate::model::{ExternalDocs, Tag};

/// Build an external documentation object.
///
/// Returns `None` unless the source carries a non-empty `url`.
pub fn build_external_docs(obj: &Map<String, Value>) -> Option<ExternalDocs> {
    let url = text(obj, "url")?;

    Some(ExternalDocs {
        url,
        description: text(obj, "description"),
        extensions: extract_extensions(obj),
    })
}

/// Build a list of tags, dropping entries without a `name`.
pub fn build_tags(items: &[Value]) -> Vec<Tag> {
    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let tag = item.as_object().and_then(build_tag);
            if tag.is_none() {
                debug!(event = "entry_dropped", index, "tag dropped: missing 'name'");
            }
            tag
        })
        .collect()
}

fn build_tag(obj: &Map<String, Value>) -> Option<Tag> {
    let name = text(obj, "name")?;

    Some(Tag {
        name,
        description: text(obj, "description"),
        external_docs: object(obj, "externalDocs").and_then(build_external_docs),
        extensions: extract_extensions(obj),
    })
}
