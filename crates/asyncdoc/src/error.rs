use std::path::PathBuf;

use thiserror::Error;

use asyncdoc_generator::GenerateError;
use asyncdoc_validator::SpecValidationError;

/// Errors that abort a generation run.
#[derive(Debug, Error)]
pub enum AsyncDocError {
    /// The requested output format is not json or yaml.
    #[error("unsupported output format '{0}' (expected json or yaml)")]
    UnsupportedFormat(String),

    /// The descriptor or requested version could not be used.
    #[error(transparent)]
    Generate(#[from] GenerateError),

    /// The assembled document failed schema validation.
    #[error(transparent)]
    Validation(#[from] SpecValidationError),

    /// The document could not be encoded.
    #[error("failed to serialize document: {0}")]
    Serialize(String),

    /// The encoded document could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AsyncDocError {
    /// Whether the error stems from bad input rather than a failed step.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::UnsupportedFormat(_) | Self::Generate(_))
    }
}
