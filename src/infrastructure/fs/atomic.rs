//! Atomic file writes
//!
//! Content goes to a temp file in the destination directory, then is renamed
//! over the target, so readers never see a half-written report.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{CanonsortError, CanonsortResult};

/// Write `content` to `path` atomically, creating parent directories
pub fn write_atomic(path: &Path, content: &[u8]) -> CanonsortResult<()> {
    let write_err = |source: std::io::Error| CanonsortError::Write {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(write_err)?;

    let mut tmp = NamedTempFile::new_in(parent).map_err(write_err)?;
    tmp.write_all(content).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}
