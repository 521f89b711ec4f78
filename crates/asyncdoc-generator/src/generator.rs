use indexmap::IndexMap;
use tracing::{debug, info_span};

use crate::descriptor::ServiceDescriptor;
use crate::error::GenerateError;
use crate::fields::{array, object};
use crate::info::build_info;
use crate::model::SpecDocument;
use crate::servers::build_servers;
use crate::tags::{build_external_docs, build_tags};
use crate::version::{Placement, SpecVersion};

/// Assembles AsyncAPI documents for one target version.
///
/// The version is fixed at construction; every call to [`Generator::generate`]
/// builds a fresh document from the descriptor it is given.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    version: SpecVersion,
}

impl Generator {
    /// Create a generator targeting the given version.
    pub fn new(version: SpecVersion) -> Self {
        Self { version }
    }

    /// Create a generator from an optional version string.
    ///
    /// `None` selects the default version (2.6.0).
    pub fn for_version(version: Option<&str>) -> Result<Self, GenerateError> {
        let version = match version {
            Some(v) => SpecVersion::parse(v)?,
            None => SpecVersion::default(),
        };
        Ok(Self::new(version))
    }

    /// The target version.
    pub fn version(&self) -> &SpecVersion {
        &self.version
    }

    /// Assemble a document from a descriptor.
    pub fn generate(&self, descriptor: &ServiceDescriptor) -> Result<SpecDocument, GenerateError> {
        let _span = info_span!("generate", asyncapi = %self.version).entered();

        let documentation = descriptor.require_documentation()?;
        let mut info = build_info(descriptor)?;

        let servers = object(documentation, "servers")
            .map(build_servers)
            .unwrap_or_default();

        let tags = array(documentation, "tags")
            .map(|items| build_tags(items))
            .unwrap_or_default();

        let external_docs = object(documentation, "externalDocs").and_then(build_external_docs);

        debug!(
            servers = servers.len(),
            tags = tags.len(),
            external_docs = external_docs.is_some(),
            "built document sections"
        );

        let (top_tags, top_external_docs) = match self.version.placement() {
            Placement::TopLevel => (tags, external_docs),
            Placement::UnderInfo => {
                info.tags = tags;
                info.external_docs = external_docs;
                (Vec::new(), None)
            }
        };

        Ok(SpecDocument {
            asyncapi: self.version.as_str().to_string(),
            info,
            servers,
            channels: IndexMap::new(),
            tags: top_tags,
            external_docs: top_external_docs,
        })
    }
}

/// Assemble a document for the given version in one call.
pub fn generate(
    descriptor: &ServiceDescriptor,
    version: &SpecVersion,
) -> Result<SpecDocument, GenerateError> {
    Generator::new(version.clone()).generate(descriptor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::parse_descriptor;
    use serde_json::{json, Value};

    const MOCK_DESCRIPTOR: &str = r#"
service: myAPI
custom:
  asyncDocumentation:
    title: My new API
    description: This API does things
    version: "0.0.1"
    servers:
      production:
        url: example.com
        protocol: http
"#;

    fn mock() -> ServiceDescriptor {
        parse_descriptor(MOCK_DESCRIPTOR).unwrap()
    }

    fn mock_with(key: &str, value: Value) -> ServiceDescriptor {
        let mut descriptor = mock();
        descriptor
            .custom
            .get_mut("asyncDocumentation")
            .and_then(|v| v.as_object_mut())
            .unwrap()
            .insert(key.to_string(), value);
        descriptor
    }

    fn generate_value(descriptor: &ServiceDescriptor, version: &str) -> Value {
        Generator::for_version(Some(version))
            .unwrap()
            .generate(descriptor)
            .unwrap()
            .to_value()
            .unwrap()
    }

    #[test]
    fn default_version_is_2_6_0() {
        let generator = Generator::for_version(None).unwrap();
        assert_eq!(generator.version().as_str(), "2.6.0");
        assert_eq!(Generator::default().version().as_str(), "2.6.0");
    }

    #[test]
    fn respects_requested_version() {
        let generator = Generator::for_version(Some("3.0.2")).unwrap();
        assert_eq!(generator.version().as_str(), "3.0.2");

        let document = generator.generate(&mock()).unwrap();
        assert_eq!(document.asyncapi, "3.0.2");
    }

    #[test]
    fn reject_unsupported_version() {
        let result = Generator::for_version(Some("1.0.0"));
        assert!(matches!(result, Err(GenerateError::UnsupportedVersion(_))));
    }

    #[test]
    fn minimal_document_round_trip() {
        let value = generate_value(&mock(), "2.6.0");

        assert_eq!(
            value,
            json!({
                "asyncapi": "2.6.0",
                "info": {
                    "title": "My new API",
                    "description": "This API does things",
                    "version": "0.0.1"
                },
                "servers": {
                    "production": {"url": "example.com", "protocol": "http"}
                },
                "channels": {}
            })
        );
    }

    #[test]
    fn missing_documentation_fails() {
        let descriptor = parse_descriptor("service: myAPI\ncustom: {}\n").unwrap();
        let result = Generator::default().generate(&descriptor);
        assert!(matches!(result, Err(GenerateError::MissingDocumentation)));
    }

    #[test]
    fn no_servers_key_when_every_server_is_dropped() {
        let descriptor = mock_with(
            "servers",
            json!({"üòç": {"url": "example.com", "protocol": "http"}}),
        );
        let value = generate_value(&descriptor, "2.6.0");
        assert!(value.get("servers").is_none());

        let descriptor = mock_with("servers", json!({"production": {"protocol": "http"}}));
        let value = generate_value(&descriptor, "2.6.0");
        assert!(value.get("servers").is_none());
    }

    #[test]
    fn tags_at_top_level_for_v2() {
        let descriptor = mock_with("tags", json!([{"name": "tag1"}]));
        let value = generate_value(&descriptor, "2.6.0");

        assert_eq!(value["tags"], json!([{"name": "tag1"}]));
        assert!(value["info"].get("tags").is_none());
    }

    #[test]
    fn tags_under_info_for_v3() {
        let descriptor = mock_with("tags", json!([{"name": "tag1"}]));
        let value = generate_value(&descriptor, "3.0.0");

        assert_eq!(value["info"]["tags"], json!([{"name": "tag1"}]));
        assert!(value.get("tags").is_none());
    }

    #[test]
    fn no_tags_key_without_named_tags() {
        let value = generate_value(&mock(), "2.6.0");
        assert!(value.get("tags").is_none());

        let descriptor = mock_with("tags", json!([{"description": "no name"}]));
        let value = generate_value(&descriptor, "2.6.0");
        assert!(value.get("tags").is_none());

        let value = generate_value(&descriptor, "3.0.0");
        assert!(value["info"].get("tags").is_none());
    }

    #[test]
    fn external_docs_at_top_level_for_v2() {
        let descriptor = mock_with(
            "externalDocs",
            json!({"url": "https://example.com", "x-extended-field": "more", "extended-field": "more"}),
        );
        let value = generate_value(&descriptor, "2.6.0");

        assert_eq!(
            value["externalDocs"],
            json!({"url": "https://example.com", "x-extended-field": "more"})
        );
        assert!(value["info"].get("externalDocs").is_none());
    }

    #[test]
    fn external_docs_under_info_for_v3() {
        let descriptor = mock_with("externalDocs", json!({"url": "https://example.com"}));
        let value = generate_value(&descriptor, "3.0.0");

        assert_eq!(value["info"]["externalDocs"], json!({"url": "https://example.com"}));
        assert!(value.get("externalDocs").is_none());
    }

    #[test]
    fn no_external_docs_without_url() {
        let descriptor = mock_with("externalDocs", json!({"description": "https://example.com"}));
        let value = generate_value(&descriptor, "2.6.0");
        assert!(value.get("externalDocs").is_none());
    }

    #[test]
    fn servers_placement_is_version_independent() {
        let v2 = generate_value(&mock(), "2.6.0");
        let v3 = generate_value(&mock(), "3.0.0");
        assert_eq!(v2["servers"], v3["servers"]);
        assert!(v3["info"].get("servers").is_none());
    }

    #[test]
    fn malformed_optional_sections_are_ignored() {
        let descriptor = mock_with("tags", json!("not-a-list"));
        let value = generate_value(&descriptor, "2.6.0");
        assert!(value.get("tags").is_none());

        let descriptor = mock_with("servers", json!(["not", "a", "map"]));
        let value = generate_value(&descriptor, "2.6.0");
        assert!(value.get("servers").is_none());
    }

    #[test]
    fn free_function_matches_generator() {
        let version = SpecVersion::parse("3.0.0").unwrap();
        let document = generate(&mock(), &version).unwrap();
        assert_eq!(document.asyncapi, "3.0.0");
        assert_eq!(document.info.title, "My new API");
    }
}
