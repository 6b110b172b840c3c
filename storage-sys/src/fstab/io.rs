// SPDX-License-Identifier: GPL-3.0-only

//! File access for fstab editing
//!
//! No locking is done: two writers racing on the same table can lose an
//! update.

use std::fs;
use std::path::Path;

use crate::error::{Access, Result, SysError};

/// Read the whole table file as raw bytes
pub fn read_table(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| SysError::io(Access::Read, path, e))
}

/// Copy the original table contents, verbatim, to `backup`
pub fn write_backup(backup: &Path, original: &[u8]) -> Result<()> {
    fs::write(backup, original).map_err(|e| SysError::io(Access::Write, backup, e))?;
    tracing::info!("wrote fstab backup to {}", backup.display());
    Ok(())
}

/// Replace the table file contents
pub fn write_table(path: &Path, contents: &[u8]) -> Result<()> {
    fs::write(path, contents).map_err(|e| SysError::io(Access::Write, path, e))
}
