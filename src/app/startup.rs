//! Application startup: argument handling, logging, and the generation run.

use crate::app::cli::args::Args;
use crate::app::cli::config;
use crate::core::build_info;
use crate::core::error::{InfoGenError, InfoGenResult};
use crate::core::error_handling::log_error_with_context;
use crate::core::generator::{self, GenerationRequest, DEFAULT_CLASS_NAME};
use crate::core::logging;
use crate::core::writer;
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;

/// Default output directory for generated sources.
pub const DEFAULT_SOURCE_OUTPUT: &str = "target/generated-sources/info";

/// Parse arguments, run one generation pass, and return the exit code.
pub fn run() -> i32 {
    let mut args = Args::parse();

    // Config before logging so file-provided log options apply to this run
    if let Err(e) = args.load_config_file() {
        eprintln!("Error: {}", e);
        return 1;
    }

    let use_color = (args.color || std::io::stdout().is_terminal()) && !args.no_color;
    if let Err(e) = logging::init_logging(
        args.log_level.as_deref(),
        args.log_format.as_deref(),
        args.log_file.as_deref(),
        use_color,
    ) {
        eprintln!("Error initialising logging: {}", e);
        return 1;
    }

    log::debug!(
        "infogen {} (built {})",
        env!("CARGO_PKG_VERSION"),
        build_info::build_time()
    );

    match generate(&args) {
        Ok(dest) => {
            log::info!("Generated {}", dest.display());
            0
        }
        Err(e) => {
            log_error_with_context(&e, "Info class generation");
            1
        }
    }
}

/// Resolve defaults, build the request, render, and write the artifact.
///
/// Aborts before any output is produced when either version string fails to
/// parse; the writer only runs on a fully validated request.
fn generate(args: &Args) -> InfoGenResult<PathBuf> {
    let spec_version = required(args.spec_version.as_deref(), "specification version")?;
    let package_name = required(args.package_name.as_deref(), "package name")?;

    let manifest_path = args
        .manifest_path
        .clone()
        .unwrap_or_else(|| PathBuf::from("Cargo.toml"));
    let impl_version = match &args.impl_version {
        Some(version) => version.clone(),
        None => config::project_version(&manifest_path)?,
    };
    let class_name = args.class_name.as_deref().unwrap_or(DEFAULT_CLASS_NAME);
    let out_root = args
        .source_output
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE_OUTPUT));

    let request =
        GenerationRequest::from_raw(spec_version, &impl_version, package_name, class_name)?;
    log::debug!(
        "rendering {}.{} for spec {} impl {}",
        request.package_name,
        request.class_name,
        request.spec_version,
        request.impl_version
    );

    let source = generator::render(&request);
    writer::write_artifact(&out_root, class_name, &source)
}

fn required<'a>(value: Option<&'a str>, field: &'static str) -> InfoGenResult<&'a str> {
    value.ok_or_else(|| InfoGenError::InvalidRequest {
        field,
        message: "required; pass it on the command line or set it in the config file".to_string(),
    })
}
