//! Artifact persistence
//!
//! Thin plumbing around the pure renderer: creates the output directory and
//! writes the rendered source file. All file-system failures are reported
//! here so the rendering core stays free of I/O.

use crate::core::error::{InfoGenError, InfoGenResult};
use crate::core::strings::to_snake_case;
use std::fs;
use std::path::{Path, PathBuf};

/// Write rendered source under `out_root`, creating missing directories.
///
/// The file is named after the generated type in snake_case, e.g.
/// `SmallRyeInfo` -> `small_rye_info.rs`. Returns the written path.
pub fn write_artifact(out_root: &Path, class_name: &str, source: &str) -> InfoGenResult<PathBuf> {
    fs::create_dir_all(out_root).map_err(|e| InfoGenError::WriteFailed {
        path: out_root.display().to_string(),
        cause: e.to_string(),
    })?;

    let dest = out_root.join(format!("{}.rs", to_snake_case(class_name)));
    fs::write(&dest, source).map_err(|e| InfoGenError::WriteFailed {
        path: dest.display().to_string(),
        cause: e.to_string(),
    })?;

    Ok(dest)
}
