//! Schema conformance checks for generated AsyncAPI documents.
//!
//! The generator hands its finished document to a [`SpecValidator`]; the
//! bundled [`SchemaValidator`] checks 2.x documents against the official
//! AsyncAPI 2.6.0 JSON Schema and 3.x documents against a schema for the
//! sections asyncdoc builds.

use std::borrow::Cow;
use std::future::Future;

use jsonschema::Validator;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use asyncdoc_generator::{Placement, SpecDocument, SpecVersion};

const ASYNCAPI_2_SCHEMA: &str = include_str!("../schemas/asyncapi-2.6.0.json");
const ASYNCAPI_3_SCHEMA: &str = include_str!("../schemas/asyncapi-3.x.json");

/// Errors reported when a document does not conform to its schema.
#[derive(Debug, Error)]
pub enum SpecValidationError {
    /// The document violates the schema for its version.
    #[error("document does not conform to AsyncAPI {version}: {}", .issues.join("; "))]
    Invalid { version: String, issues: Vec<String> },

    /// The document's `asyncapi` field is missing or names no supported version.
    #[error("cannot validate AsyncAPI version '{0}'")]
    UnsupportedVersion(String),

    /// A bundled schema failed to load.
    #[error("invalid bundled schema: {0}")]
    Schema(String),

    /// The document could not be converted to JSON for validation.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Something that can confirm a generated document is well-formed.
pub trait SpecValidator {
    /// Validate the document, reporting every violation found.
    fn validate(
        &self,
        document: &SpecDocument,
    ) -> impl Future<Output = Result<(), SpecValidationError>> + Send;
}

/// The 2.x release whose official schema is bundled.
///
/// That schema pins `asyncapi` to this value; earlier 2.x documents are
/// checked against it as well, since 2.x minors only add fields.
pub const BUNDLED_2X_VERSION: &str = "2.6.0";

/// JSON Schema validator for AsyncAPI 2.x and 3.x documents.
pub struct SchemaValidator {
    v2: Validator,
    v3: Validator,
}

impl SchemaValidator {
    /// Compile the bundled schemas.
    pub fn new() -> Result<Self, SpecValidationError> {
        Ok(Self {
            v2: compile(ASYNCAPI_2_SCHEMA)?,
            v3: compile(ASYNCAPI_3_SCHEMA)?,
        })
    }

    /// Validate a plain JSON document.
    ///
    /// The schema is selected from the document's own `asyncapi` field.
    pub fn validate_value(&self, document: &Value) -> Result<(), SpecValidationError> {
        let raw = document
            .get("asyncapi")
            .and_then(|v| v.as_str())
            .unwrap_or_default();

        let version = SpecVersion::parse(raw)
            .map_err(|_| SpecValidationError::UnsupportedVersion(raw.to_string()))?;

        let (validator, document) = match version.placement() {
            Placement::TopLevel if version.as_str() != BUNDLED_2X_VERSION => {
                let mut pinned = document.clone();
                pinned["asyncapi"] = Value::from(BUNDLED_2X_VERSION);
                (&self.v2, Cow::Owned(pinned))
            }
            Placement::TopLevel => (&self.v2, Cow::Borrowed(document)),
            Placement::UnderInfo => (&self.v3, Cow::Borrowed(document)),
        };

        let issues: Vec<String> = validator
            .iter_errors(&document)
            .map(|e| format!("{}: {}", e.instance_path, e))
            .collect();

        if issues.is_empty() {
            debug!(asyncapi = %version, "document conforms to schema");
            Ok(())
        } else {
            Err(SpecValidationError::Invalid {
                version: version.to_string(),
                issues,
            })
        }
    }
}

impl SpecValidator for SchemaValidator {
    async fn validate(&self, document: &SpecDocument) -> Result<(), SpecValidationError> {
        let value = document.to_value()?;
        self.validate_value(&value)
    }
}

fn compile(schema_json: &str) -> Result<Validator, SpecValidationError> {
    let schema: Value =
        serde_json::from_str(schema_json).map_err(|e| SpecValidationError::Schema(e.to_string()))?;

    jsonschema::validator_for(&schema)
        .map_err(|e| SpecValidationError::Schema(format!("invalid JSON Schema: {}", e)))
}
