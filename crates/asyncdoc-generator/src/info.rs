//! The `info` object builder.

use serde_json::{Map, Value};
use tracing::debug;
use uuid::Uuid;

use crate::descriptor::ServiceDescriptor;
use crate::error::GenerateError;
use crate::extensions::extract_extensions;
use crate::fields::{is_set, text};
use crate::model::{Contact, Info, License};

/// Build the `info` object from `custom.asyncDocumentation`.
///
/// Falls back to the service name for the title, an empty description, and a
/// fresh v4 UUID for the version. Fails if the documentation section is
/// missing.
pub fn build_info(descriptor: &ServiceDescriptor) -> Result<Info, GenerateError> {
    let documentation = descriptor.require_documentation()?;

    let title = text(documentation, "title").unwrap_or_else(|| descriptor.service.clone());
    let description = text(documentation, "description").unwrap_or_default();
    let version = text(documentation, "version").unwrap_or_else(|| {
        let generated = Uuid::new_v4().to_string();
        debug!(version = %generated, "no documentation version set, generated one");
        generated
    });

    Ok(Info {
        title,
        description,
        version,
        terms_of_service: text(documentation, "termsOfService"),
        contact: build_contact(documentation),
        license: build_license(documentation),
        tags: Vec::new(),
        external_docs: None,
        extensions: extract_extensions(documentation),
    })
}

/// Contact is emitted whenever the key is set, with empty name/email defaults.
fn build_contact(documentation: &Map<String, Value>) -> Option<Contact> {
    let value = documentation.get("contact").filter(|v| is_set(v))?;
    let empty = Map::new();
    let contact = value.as_object().unwrap_or(&empty);

    Some(Contact {
        name: text(contact, "name").unwrap_or_default(),
        url: text(contact, "url"),
        email: text(contact, "email").unwrap_or_default(),
        extensions: extract_extensions(contact),
    })
}

fn build_license(documentation: &Map<String, Value>) -> Option<License> {
    let license = documentation.get("license").and_then(|v| v.as_object())?;
    let name = text(license, "name")?;

    Some(License {
        name,
        url: text(license, "url"),
        extensions: extract_extensions(license),
    })
}
