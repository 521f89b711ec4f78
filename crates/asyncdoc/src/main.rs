//! asyncdoc.
//!
//! Generates AsyncAPI documents from serverless service descriptors.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use asyncdoc_generator::DEFAULT_ASYNCAPI_VERSION;
use asyncdoc_lib::{run, AsyncDocError, GenerateOptions, OutputFormat, DEFAULT_CONFIG};
use asyncdoc_telemetry::{LogFormat, TelemetryConfig};

#[derive(Parser, Debug)]
#[command(
    name = "asyncdoc",
    about = "Generate AsyncAPI documents from serverless service descriptors",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate an AsyncAPI document from a service descriptor.
    ///
    /// Reads `custom.asyncDocumentation`, validates the assembled document
    /// against the AsyncAPI schema and writes it to the output file.
    Generate {
        /// Service descriptor (YAML or JSON).
        #[arg(short, long, env = "ASYNCDOC_CONFIG", default_value = DEFAULT_CONFIG)]
        config: PathBuf,

        /// Output file (default: asyncapi.json or asyncapi.yml by format).
        #[arg(short, long, env = "ASYNCDOC_OUTPUT")]
        output: Option<PathBuf>,

        /// Output format (json or yaml).
        #[arg(short, long, env = "ASYNCDOC_FORMAT", default_value = "json")]
        format: String,

        /// JSON indentation width (0 for compact output).
        #[arg(short, long, env = "ASYNCDOC_INDENT", default_value_t = 2)]
        indent: usize,

        /// Target AsyncAPI version.
        #[arg(
            short = 'a',
            long = "asyncApiVersion",
            env = "ASYNCDOC_ASYNCAPI_VERSION",
            default_value = DEFAULT_ASYNCAPI_VERSION
        )]
        asyncapi_version: String,

        /// Log level (overridden by RUST_LOG).
        #[arg(long, env = "ASYNCDOC_LOG_LEVEL", default_value = "info")]
        log_level: String,

        /// Log format (pretty or json).
        #[arg(long, env = "ASYNCDOC_LOG_FORMAT", default_value = "pretty")]
        log_format: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            config,
            output,
            format,
            indent,
            asyncapi_version,
            log_level,
            log_format,
        } => {
            let Some(log_format) = LogFormat::parse(&log_format) else {
                eprintln!("error: unsupported log format '{}' (expected pretty or json)", log_format);
                return ExitCode::from(1);
            };

            let telemetry = TelemetryConfig::new()
                .with_log_level(log_level)
                .with_log_format(log_format);
            if let Err(e) = asyncdoc_telemetry::init(&telemetry) {
                eprintln!("error: {}", e);
                return ExitCode::from(1);
            }

            // The format is checked before the descriptor is touched.
            let format = match OutputFormat::parse(&format) {
                Ok(format) => format,
                Err(e) => return report(&e),
            };

            let mut options = GenerateOptions::new()
                .with_config(config)
                .with_format(format)
                .with_indent(indent)
                .with_asyncapi_version(asyncapi_version);
            if let Some(output) = output {
                options = options.with_output(output);
            }

            run_generate(&options).await
        }
    }
}

async fn run_generate(options: &GenerateOptions) -> ExitCode {
    match run(options).await {
        Ok(path) => {
            eprintln!(
                "generated AsyncAPI {} document at {}",
                options.asyncapi_version,
                path.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => report(&e),
    }
}

/// Print a failed run and map it to the process exit code.
fn report(e: &AsyncDocError) -> ExitCode {
    if e.is_configuration() {
        eprintln!("error: invalid configuration: {}", e);
    } else {
        eprintln!("error: {}", e);
    }
    ExitCode::from(1)
}
