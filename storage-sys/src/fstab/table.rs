// SPDX-License-Identifier: GPL-3.0-only

//! In-memory fstab table and record rewriting
//!
//! Every line of the file is kept as raw bytes, terminator included, so
//! lines that are not valid UTF-8 survive untouched. Only the record being
//! edited is ever re-emitted, as tab separated fields.

use tracing::{debug, info};

use super::merge::merge_options;
use crate::error::{Result, SysError};

/// Options written when a merge removes every option from a record
const EMPTY_OPTIONS_PLACEHOLDER: &str = "defaults";

/// One well-formed six field fstab entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FstabRecord {
    pub device: String,
    pub mount_point: String,
    pub fs_type: String,
    pub options: String,
    /// Kept as written; only checked to be an integer
    pub dump: String,
    pub pass: String,
}

impl FstabRecord {
    /// Parse a line as a record.
    ///
    /// Returns `None` unless the line has exactly six fields and both
    /// dump and pass parse as integers.
    pub fn parse(line: &str) -> Option<Self> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let [device, mount_point, fs_type, options, dump, pass] = fields.as_slice() else {
            return None;
        };
        if dump.parse::<i64>().is_err() || pass.parse::<i64>().is_err() {
            return None;
        }

        Some(Self {
            device: device.to_string(),
            mount_point: mount_point.to_string(),
            fs_type: fs_type.to_string(),
            options: options.to_string(),
            dump: dump.to_string(),
            pass: pass.to_string(),
        })
    }

    pub fn to_line(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}\t{}\n",
            self.device, self.mount_point, self.fs_type, self.options, self.dump, self.pass
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableLine {
    /// Comment, blank line, non UTF-8 line or anything that is not a record
    Opaque(Vec<u8>),
    Record { raw: Vec<u8>, record: FstabRecord },
}

impl TableLine {
    fn parse(raw: &[u8]) -> Self {
        let Ok(text) = std::str::from_utf8(raw) else {
            return Self::Opaque(raw.to_vec());
        };
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Self::Opaque(raw.to_vec());
        }
        match FstabRecord::parse(trimmed) {
            Some(record) => Self::Record {
                raw: raw.to_vec(),
                record,
            },
            None => Self::Opaque(raw.to_vec()),
        }
    }

    pub fn raw(&self) -> &[u8] {
        match self {
            Self::Opaque(raw) | Self::Record { raw, .. } => raw,
        }
    }
}

/// Fields of a non-comment UTF-8 line
fn entry_fields(raw: &[u8]) -> Option<Vec<&str>> {
    let trimmed = std::str::from_utf8(raw).ok()?.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    Some(trimmed.split_whitespace().collect())
}

/// Lines of an fstab file, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FstabTable {
    lines: Vec<TableLine>,
}

impl FstabTable {
    pub fn parse(contents: &[u8]) -> Self {
        Self {
            lines: contents
                .split_inclusive(|byte| *byte == b'\n')
                .map(TableLine::parse)
                .collect(),
        }
    }

    pub fn lines(&self) -> &[TableLine] {
        &self.lines
    }

    pub fn records(&self) -> impl Iterator<Item = &FstabRecord> {
        self.lines.iter().filter_map(|line| match line {
            TableLine::Record { record, .. } => Some(record),
            TableLine::Opaque(_) => None,
        })
    }

    /// First record mounted at `mount_point`
    pub fn find(&self, mount_point: &str) -> Option<&FstabRecord> {
        self.records().find(|record| record.mount_point == mount_point)
    }

    /// Merge `directive` into the first record mounted at `mount_point`.
    ///
    /// Returns `Ok(false)` when no record matches. On error the table is
    /// left untouched.
    pub fn apply(&mut self, mount_point: &str, directive: &str) -> Result<bool> {
        for (index, line) in self.lines.iter_mut().enumerate() {
            let line_number = index + 1;
            match line {
                TableLine::Opaque(raw) => {
                    let Some(fields) = entry_fields(raw) else {
                        continue;
                    };
                    if fields.len() != 6 && fields.get(1) == Some(&mount_point) {
                        return Err(SysError::Structural {
                            line_number,
                            content: String::from_utf8_lossy(raw).trim_end().to_string(),
                        });
                    }
                    if fields.len() == 6 {
                        debug!(line_number, "skipping line with non-integer dump/pass fields");
                    }
                }
                TableLine::Record { raw, record } if record.mount_point == mount_point => {
                    let merged = merge_options(&record.options, directive)?;
                    record.options = if merged.is_empty() {
                        EMPTY_OPTIONS_PLACEHOLDER.to_string()
                    } else {
                        merged
                    };
                    *raw = record.to_line().into_bytes();
                    info!(
                        line_number,
                        mount_point,
                        options = %record.options,
                        "rewrote fstab record"
                    );
                    return Ok(true);
                }
                TableLine::Record { .. } => {}
            }
        }
        Ok(false)
    }

    /// Reassemble the file contents.
    pub fn render(&self) -> Vec<u8> {
        self.lines.iter().flat_map(TableLine::raw).copied().collect()
    }
}
