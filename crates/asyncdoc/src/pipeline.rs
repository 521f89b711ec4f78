//! The generation pipeline: load, assemble, validate, write.

use std::path::PathBuf;

use asyncdoc_generator::{parse_descriptor_file, Generator, ServiceDescriptor, SpecDocument};
use asyncdoc_telemetry::{
    log_document_generated, log_document_validated, log_document_written,
    log_generation_started, log_validation_failure,
};
use asyncdoc_validator::{SchemaValidator, SpecValidator};

use crate::output::{render, write_document};
use crate::{AsyncDocError, GenerateOptions};

/// Assemble a document and await its validation.
///
/// Nothing is returned unless the validator accepts the document.
pub async fn generate_validated<V: SpecValidator>(
    generator: &Generator,
    descriptor: &ServiceDescriptor,
    validator: &V,
) -> Result<SpecDocument, AsyncDocError> {
    let document = generator.generate(descriptor)?;
    log_document_generated!(
        asyncapi = %document.asyncapi,
        servers = document.servers.len(),
        "document assembled"
    );

    if let Err(e) = validator.validate(&document).await {
        log_validation_failure!(asyncapi = %document.asyncapi, error = %e, "document rejected");
        return Err(e.into());
    }
    log_document_validated!(asyncapi = %document.asyncapi, "document validated");

    Ok(document)
}

/// Run a full generation with the bundled schema validator.
///
/// Returns the path the document was written to. On any failure no file is
/// written.
pub async fn run(options: &GenerateOptions) -> Result<PathBuf, AsyncDocError> {
    let generator = Generator::for_version(Some(&options.asyncapi_version))?;
    let path = options.output_path();

    log_generation_started!(
        config = %options.config.display(),
        output = %path.display(),
        format = %options.format,
        indent = options.indent,
        asyncapi = %generator.version(),
        "generating AsyncAPI document"
    );

    let descriptor = parse_descriptor_file(&options.config)?;
    let validator = SchemaValidator::new()?;
    let document = generate_validated(&generator, &descriptor, &validator).await?;

    let contents = render(&document, options.format, options.indent)?;
    write_document(&path, &contents)?;

    log_document_written!(
        path = %path.display(),
        bytes = contents.len(),
        "document written"
    );

    Ok(path)
}
