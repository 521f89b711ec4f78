use thiserror::Error;

/// Errors produced while loading a descriptor or assembling a document.
///
/// Every variant is a configuration problem: the run is aborted before any
/// output is produced.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The descriptor has no `custom.asyncDocumentation` mapping.
    #[error("missing required 'custom.asyncDocumentation' section in service descriptor")]
    MissingDocumentation,

    /// The requested AsyncAPI version has no usable major component.
    #[error("unsupported AsyncAPI version: '{0}' (expected 2.x or later)")]
    UnsupportedVersion(String),

    /// YAML/JSON parse error in the descriptor.
    #[error("descriptor parse error: {0}")]
    Parse(String),

    /// I/O error reading the descriptor file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
