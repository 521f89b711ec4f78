//! Rendering and writing the finished document.

use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::warn;

use asyncdoc_generator::SpecDocument;

use crate::{AsyncDocError, OutputFormat, DEFAULT_INDENT};

/// Encode the document in the requested format.
///
/// JSON uses `indent` spaces per level, or a compact single line when
/// `indent` is 0. YAML always uses the serializer's own two-space layout;
/// any other indent is reported and ignored.
pub fn render(
    document: &SpecDocument,
    format: OutputFormat,
    indent: usize,
) -> Result<String, AsyncDocError> {
    match format {
        OutputFormat::Json => render_json(document, indent),
        OutputFormat::Yaml => {
            if indent != DEFAULT_INDENT {
                warn!(indent, "indent setting ignored for YAML output");
            }
            serde_yaml::to_string(document).map_err(|e| AsyncDocError::Serialize(e.to_string()))
        }
    }
}

fn render_json(document: &SpecDocument, indent: usize) -> Result<String, AsyncDocError> {
    if indent == 0 {
        return serde_json::to_string(document).map_err(|e| AsyncDocError::Serialize(e.to_string()));
    }

    let indent = vec![b' '; indent];
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&indent));
    document
        .serialize(&mut ser)
        .map_err(|e| AsyncDocError::Serialize(e.to_string()))?;

    String::from_utf8(buf).map_err(|e| AsyncDocError::Serialize(e.to_string()))
}

/// Write rendered output to `path`, replacing any existing file.
pub fn write_document(path: &Path, contents: &str) -> Result<(), AsyncDocError> {
    std::fs::write(path, contents).map_err(|source| AsyncDocError::Write {
        path: path.to_path_buf(),
        source,
    })
}
