//! TOML configuration file loading
//!
//! Values from the configuration file fill in options the command line left
//! unset; command-line values always win. Also resolves the implementation
//! version default from the host project's manifest.

use super::args::Args;
use crate::core::error::{InfoGenError, InfoGenResult};
use std::path::{Path, PathBuf};

/// Default configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "infogen.toml";

impl Args {
    /// Load and apply the configuration file, if any.
    ///
    /// An explicitly named file must exist; the default file is optional.
    pub fn load_config_file(&mut self) -> InfoGenResult<()> {
        let path = match &self.config_file {
            Some(path) => {
                if !path.exists() {
                    return Err(InfoGenError::InvalidRequest {
                        field: "config file",
                        message: format!("{} does not exist", path.display()),
                    });
                }
                path.clone()
            }
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default.exists() {
                    return Ok(());
                }
                default
            }
        };

        let contents =
            std::fs::read_to_string(&path).map_err(|e| InfoGenError::InvalidRequest {
                field: "config file",
                message: format!("cannot read {}: {}", path.display(), e),
            })?;
        let table: toml::Table = contents.parse().map_err(|e| InfoGenError::InvalidRequest {
            field: "config file",
            message: format!("cannot parse {}: {}", path.display(), e),
        })?;
        self.apply_toml_values(&table);
        Ok(())
    }

    /// Apply configuration values for options not set on the command line.
    pub fn apply_toml_values(&mut self, config: &toml::Table) {
        apply_string(config, "spec-version", &mut self.spec_version);
        apply_string(config, "impl-version", &mut self.impl_version);
        apply_string(config, "package-name", &mut self.package_name);
        apply_string(config, "class-name", &mut self.class_name);
        apply_path(config, "source-output", &mut self.source_output);
        apply_path(config, "manifest-path", &mut self.manifest_path);
        apply_string(config, "log-level", &mut self.log_level);
        apply_string(config, "log-format", &mut self.log_format);
        apply_path(config, "log-file", &mut self.log_file);
        if !self.color && !self.no_color {
            if let Some(color) = config.get("color").and_then(|v| v.as_bool()) {
                self.color = color;
                self.no_color = !color;
            }
        }
    }
}

fn apply_string(config: &toml::Table, key: &str, target: &mut Option<String>) {
    if target.is_none() {
        if let Some(value) = config.get(key).and_then(|v| v.as_str()) {
            *target = Some(value.to_string());
        }
    }
}

fn apply_path(config: &toml::Table, key: &str, target: &mut Option<PathBuf>) {
    if target.is_none() {
        if let Some(value) = config.get(key).and_then(|v| v.as_str()) {
            *target = Some(PathBuf::from(value));
        }
    }
}

/// Read `package.version` from a Cargo manifest, used as the implementation
/// version when the caller provides none.
pub fn project_version(manifest_path: &Path) -> InfoGenResult<String> {
    let contents =
        std::fs::read_to_string(manifest_path).map_err(|e| InfoGenError::InvalidRequest {
            field: "implementation version",
            message: format!(
                "not given and {} cannot be read: {}",
                manifest_path.display(),
                e
            ),
        })?;
    let manifest: toml::Table = contents.parse().map_err(|e| InfoGenError::InvalidRequest {
        field: "implementation version",
        message: format!(
            "not given and {} cannot be parsed: {}",
            manifest_path.display(),
            e
        ),
    })?;

    manifest
        .get("package")
        .and_then(|p| p.as_table())
        .and_then(|p| p.get("version"))
        .and_then(|v| v.as_str())
        .map(|v| v.to_string())
        .ok_or_else(|| InfoGenError::InvalidRequest {
            field: "implementation version",
            message: format!(
                "not given and {} has no package.version",
                manifest_path.display()
            ),
        })
}
