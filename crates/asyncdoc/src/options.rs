//! Options for a single generation run.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use asyncdoc_generator::DEFAULT_ASYNCAPI_VERSION;

use crate::AsyncDocError;

/// Default descriptor path.
pub const DEFAULT_CONFIG: &str = "serverless.yml";

/// Default JSON indentation width.
pub const DEFAULT_INDENT: usize = 2;

/// Serialization format of the written document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

impl OutputFormat {
    /// Parse a format name. `yml` is accepted as an alias for `yaml`.
    pub fn parse(s: &str) -> Result<Self, AsyncDocError> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(AsyncDocError::UnsupportedFormat(s.to_string())),
        }
    }

    /// Output file used when none is given.
    pub fn default_output(&self) -> &'static str {
        match self {
            Self::Json => "asyncapi.json",
            Self::Yaml => "asyncapi.yml",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = AsyncDocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Yaml => f.write_str("yaml"),
        }
    }
}

/// Options for [`crate::run`].
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Descriptor to read (default: `serverless.yml`).
    pub config: PathBuf,

    /// Destination file. Derived from the format when unset.
    pub output: Option<PathBuf>,

    /// Output format (default: JSON).
    pub format: OutputFormat,

    /// JSON indentation width; 0 writes compact JSON. Ignored for YAML.
    pub indent: usize,

    /// Target AsyncAPI version (default: 2.6.0).
    pub asyncapi_version: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            config: PathBuf::from(DEFAULT_CONFIG),
            output: None,
            format: OutputFormat::default(),
            indent: DEFAULT_INDENT,
            asyncapi_version: DEFAULT_ASYNCAPI_VERSION.to_string(),
        }
    }
}

impl GenerateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, path: impl Into<PathBuf>) -> Self {
        self.config = path.into();
        self
    }

    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_asyncapi_version(mut self, version: impl Into<String>) -> Self {
        self.asyncapi_version = version.into();
        self
    }

    /// The file the document will be written to.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| Path::new(self.format.default_output()).to_path_buf())
    }
}
