//! AsyncAPI document generator.
//!
//! Reads a serverless-style service descriptor, builds the `info`, `servers`,
//! `tags` and `externalDocs` sections from `custom.asyncDocumentation`, and
//! places them according to the target AsyncAPI major version.

pub mod descriptor;
pub mod error;
pub mod extensions;
mod fields;
pub mod generator;
pub mod info;
pub mod model;
pub mod servers;
pub mod tags;
pub mod version;

pub use descriptor::{parse_descriptor, parse_descriptor_file, ServiceDescriptor};
pub use error::GenerateError;
pub use extensions::extract_extensions;
pub use generator::{generate, Generator};
pub use model::{
    Contact, ExternalDocs, Extensions, Info, License, Server, ServerVariable, SpecDocument, Tag,
};
pub use version::{Placement, SpecVersion, DEFAULT_ASYNCAPI_VERSION};
