// SPDX-License-Identifier: GPL-3.0-only

//! fstab record option editing
//!
//! This crate edits the mount option field of one record in an
//! fstab-style table:
//! - Decoding and encoding option fields
//! - Parsing `+key -key key=value` directives
//! - Merging directives into an option field
//! - Rewriting the matching record and writing the table back
//!
//! Writing `/etc/fstab` requires elevated privileges.

pub mod error;
pub mod fstab;

pub use error::{Access, ParseError, Result, SysError};
pub use fstab::{FstabRecord, FstabTable, OptionSet, edit_fstab, merge_options, parse_directive};
