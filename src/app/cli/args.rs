//! Command-line arguments for the info class generator
//!
//! Every generation option may also come from a TOML configuration file;
//! command-line values take precedence (see [`super::config`]).

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "infogen")]
#[command(about = "Generate a version info source file for a library build")]
#[command(version)]
pub struct Args {
    /// Version of the specification being implemented
    #[arg(short = 's', long = "spec-version", value_name = "VERSION")]
    pub spec_version: Option<String>,

    /// Version of the implementation (defaults to the project version from the manifest)
    #[arg(short = 'i', long = "impl-version", value_name = "VERSION")]
    pub impl_version: Option<String>,

    /// Dot-separated namespace of the generated type, e.g. io.smallrye.config
    #[arg(short = 'p', long = "package-name", value_name = "NAME")]
    pub package_name: Option<String>,

    /// Name of the generated type (normally left at the default)
    #[arg(short = 'n', long = "class-name", value_name = "NAME")]
    pub class_name: Option<String>,

    /// Directory the generated source is written to
    #[arg(short = 'o', long = "source-output", value_name = "DIR")]
    pub source_output: Option<PathBuf>,

    /// Manifest consulted for the implementation version default
    #[arg(short = 'm', long = "manifest-path", value_name = "FILE")]
    pub manifest_path: Option<PathBuf>,

    /// Configuration file path
    #[arg(short = 'c', long = "config-file", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Log level
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = ["trace", "debug", "info", "warn", "error", "off"])]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(long = "log-format", value_name = "FORMAT", value_parser = ["text", "json"])]
    pub log_format: Option<String>,

    /// Log file path
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Force colored output (default: auto-detect from the terminal)
    #[arg(long = "color", conflicts_with = "no_color")]
    pub color: bool,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,
}
