// SPDX-License-Identifier: GPL-3.0-only

//! fstab mount option editing
//!
//! Reads a table, merges a directive into the option field of one record
//! and writes the table back. Either the whole rewritten table is written
//! or nothing is.

pub mod directive;
pub mod io;
pub mod merge;
pub mod options;
pub mod table;

pub use directive::parse_directive;
pub use merge::merge_options;
pub use options::OptionSet;
pub use table::{FstabRecord, FstabTable, TableLine};

use storage_types::{FstabEditOutcome, FstabEditRequest};
use tracing::{info, warn};

use crate::error::Result;

/// Run one edit invocation end to end.
///
/// The backup, when requested, is written from the exact bytes read, before
/// any record is inspected. Dry runs write neither the backup nor the table.
pub fn edit_fstab(request: &FstabEditRequest) -> Result<FstabEditOutcome> {
    let fstab = request.fstab.as_path();
    let original = io::read_table(fstab)?;

    if let Some(backup) = &request.backup {
        if request.dry_run {
            info!("dry run: skipping backup to {}", backup.display());
        } else {
            io::write_backup(backup, &original)?;
        }
    }

    let mut table = FstabTable::parse(&original);
    if !table.apply(&request.path, &request.options)? {
        warn!(
            mount_point = %request.path,
            "no record found in {}",
            fstab.display()
        );
        return Ok(FstabEditOutcome::unchanged(format!(
            "{} not found in fstab file {}, nothing done",
            request.path,
            fstab.display()
        )));
    }

    let options = table
        .find(&request.path)
        .map(|record| record.options.clone())
        .unwrap_or_default();

    if request.dry_run {
        return Ok(FstabEditOutcome::changed(format!(
            "dry run: options of {} would become {} in fstab file {}",
            request.path,
            options,
            fstab.display()
        )));
    }

    io::write_table(fstab, &table.render())?;
    Ok(FstabEditOutcome::changed(format!(
        "options of {} set to {} in fstab file {}",
        request.path,
        options,
        fstab.display()
    )))
}
