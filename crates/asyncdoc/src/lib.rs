//! asyncdoc library.
//!
//! Ties the generator, validator and output rendering into a single run.
//! The main entry point is the `asyncdoc` binary.

pub mod error;
pub mod options;
pub mod output;
pub mod pipeline;

pub use error::AsyncDocError;
pub use options::{GenerateOptions, OutputFormat, DEFAULT_CONFIG, DEFAULT_INDENT};
pub use output::{render, write_document};
pub use pipeline::{generate_validated, run};
