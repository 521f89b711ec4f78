use std::path::Path;

use serde_json::{Map, Value};

use crate::error::GenerateError;

/// Key of the documentation section under `custom`.
pub const DOCUMENTATION_KEY: &str = "asyncDocumentation";

/// A serverless-style service descriptor.
///
/// Only the declared service name and the `custom` section are retained;
/// everything else in the source file is ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceDescriptor {
    /// The declared service name (`service` or `service.name`).
    pub service: String,
    /// The `custom` section, as authored.
    pub custom: Map<String, Value>,
}

impl ServiceDescriptor {
    /// Create a descriptor with an empty `custom` section.
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            custom: Map::new(),
        }
    }

    /// Set `custom.asyncDocumentation`.
    pub fn with_documentation(mut self, documentation: Value) -> Self {
        self.custom
            .insert(DOCUMENTATION_KEY.to_string(), documentation);
        self
    }

    /// Build a descriptor from an already-parsed configuration tree.
    pub fn from_value(root: Value) -> Result<Self, GenerateError> {
        let Value::Object(mut root) = root else {
            return Err(GenerateError::Parse(
                "descriptor root must be an object".into(),
            ));
        };

        // `service: name` and `service: { name: ... }` are both accepted
        let service = match root.get("service") {
            Some(Value::String(name)) => name.clone(),
            Some(Value::Object(obj)) => obj
                .get("name")
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string(),
            _ => String::new(),
        };

        let custom = match root.remove("custom") {
            Some(Value::Object(custom)) => custom,
            _ => Map::new(),
        };

        Ok(Self { service, custom })
    }

    /// The `custom.asyncDocumentation` mapping, if present.
    pub fn documentation(&self) -> Option<&Map<String, Value>> {
        self.custom.get(DOCUMENTATION_KEY).and_then(|v| v.as_object())
    }

    /// The `custom.asyncDocumentation` mapping, or a configuration error.
    pub fn require_documentation(&self) -> Result<&Map<String, Value>, GenerateError> {
        self.documentation()
            .ok_or(GenerateError::MissingDocumentation)
    }
}

/// Parse a service descriptor from a YAML/JSON string.
pub fn parse_descriptor(input: &str) -> Result<ServiceDescriptor, GenerateError> {
    // Parse YAML (also handles JSON since JSON is valid YAML)
    let root: Value =
        serde_yaml::from_str(input).map_err(|e| GenerateError::Parse(e.to_string()))?;

    ServiceDescriptor::from_value(root)
}

/// Parse a service descriptor from a file path.
pub fn parse_descriptor_file(path: &Path) -> Result<ServiceDescriptor, GenerateError> {
    let content = std::fs::read_to_string(path)?;
    parse_descriptor(&content)
}
