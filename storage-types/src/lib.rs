// SPDX-License-Identifier: GPL-3.0-only

//! Canonical domain models for fstab option editing
//!
//! These models are shared by the stack:
//!
//! - **storage-sys**: parses directives into [`OptionChange`] values and
//!   returns [`FstabEditOutcome`] from its public API
//! - **storage-fstab**: deserializes [`FstabEditRequest`] from the command
//!   line or a JSON parameters document and prints the outcome as JSON

pub mod fstab;

pub use fstab::{
    DEFAULT_FSTAB_PATH, FstabEditOutcome, FstabEditRequest, OptionAction, OptionChange,
};
