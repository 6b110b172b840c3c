// SPDX-License-Identifier: GPL-3.0-only

//! fstab option editing types
//!
//! Request, change and outcome models for editing the option field of a
//! single fstab record.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Table edited when the request does not name one
pub const DEFAULT_FSTAB_PATH: &str = "/etc/fstab";

/// What a single directive does to its key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionAction {
    /// Set the key, inserting it at the end if absent
    Add,
    /// Delete the key if present
    Remove,
}

impl OptionAction {
    pub fn sign(self) -> char {
        match self {
            Self::Add => '+',
            Self::Remove => '-',
        }
    }
}

/// One parsed directive token, e.g. `+nodev`, `-noauto` or `uid=1000`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionChange {
    pub action: OptionAction,
    pub key: String,
    /// `None` for flag-style options
    pub value: Option<String>,
}

impl OptionChange {
    pub fn add(key: impl Into<String>, value: Option<&str>) -> Self {
        Self {
            action: OptionAction::Add,
            key: key.into(),
            value: value.map(ToOwned::to_owned),
        }
    }

    pub fn remove(key: impl Into<String>) -> Self {
        Self {
            action: OptionAction::Remove,
            key: key.into(),
            value: None,
        }
    }
}

impl fmt::Display for OptionChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.action.sign(), self.key)?;
        if let Some(value) = &self.value {
            write!(f, "={value}")?;
        }
        Ok(())
    }
}

fn default_fstab_path() -> PathBuf {
    PathBuf::from(DEFAULT_FSTAB_PATH)
}

/// Parameters of one edit invocation
///
/// Deserializes from the parameters document an automation tool hands to
/// the module; keys it does not know about are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FstabEditRequest {
    /// Mount point of the record to edit
    pub path: String,
    /// Space separated directive, e.g. `"+nodev -noauto +uid=1000"`
    pub options: String,
    /// Table file to read and rewrite
    #[serde(default = "default_fstab_path")]
    pub fstab: PathBuf,
    /// Where to copy the original table before touching it
    #[serde(default)]
    pub backup: Option<PathBuf>,
    /// Validate and report without writing anything
    #[serde(default)]
    pub dry_run: bool,
}

impl FstabEditRequest {
    pub fn new(path: impl Into<String>, options: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            options: options.into(),
            fstab: default_fstab_path(),
            backup: None,
            dry_run: false,
        }
    }
}

/// Result reported back to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FstabEditOutcome {
    /// True only when a record was found and its options were merged
    pub changed: bool,
    pub message: String,
}

impl FstabEditOutcome {
    pub fn changed(message: impl Into<String>) -> Self {
        Self {
            changed: true,
            message: message.into(),
        }
    }

    pub fn unchanged(message: impl Into<String>) -> Self {
        Self {
            changed: false,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_defaults_fill_missing_fields() {
        let request: FstabEditRequest =
            serde_json::from_str(r#"{"path": "/var", "options": "+nodev"}"#).unwrap();

        assert_eq!(request.path, "/var");
        assert_eq!(request.options, "+nodev");
        assert_eq!(request.fstab, PathBuf::from("/etc/fstab"));
        assert_eq!(request.backup, None);
        assert!(!request.dry_run);
    }

    #[test]
    fn request_ignores_unknown_keys() {
        let request: FstabEditRequest = serde_json::from_str(
            r#"{
                "path": "/usr",
                "options": "-nosuid",
                "fstab": "/tmp/fstab",
                "backup": "/tmp/fstab.bak",
                "_ansible_check_mode": false,
                "_ansible_verbosity": 0
            }"#,
        )
        .unwrap();

        assert_eq!(request.fstab, PathBuf::from("/tmp/fstab"));
        assert_eq!(request.backup, Some(PathBuf::from("/tmp/fstab.bak")));
    }

    #[test]
    fn outcome_serializes_changed_and_message() {
        let outcome = FstabEditOutcome::unchanged("nothing done");
        let json = serde_json::to_value(&outcome).unwrap();

        assert_eq!(json["changed"], false);
        assert_eq!(json["message"], "nothing done");
    }

    #[test]
    fn change_displays_as_directive_token() {
        assert_eq!(OptionChange::add("nodev", None).to_string(), "+nodev");
        assert_eq!(
            OptionChange::add("truc", Some("bidule")).to_string(),
            "+truc=bidule"
        );
        assert_eq!(OptionChange::remove("noauto").to_string(), "-noauto");
    }

    #[test]
    fn action_serializes_lowercase() {
        let json = serde_json::to_string(&OptionChange::remove("noauto")).unwrap();
        assert_eq!(json, r#"{"action":"remove","key":"noauto","value":null}"#);
    }
}
