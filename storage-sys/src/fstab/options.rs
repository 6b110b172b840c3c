// SPDX-License-Identifier: GPL-3.0-only

//! Option field codec
//!
//! Converts the comma separated option field of an fstab record
//! (`key[=value],key[=value],...`) to and from an order preserving set.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::error::ParseError;

/// Split `key[=value]` on `=`.
///
/// Returns `None` when the text holds more than one `=` or the key is empty.
pub(crate) fn split_key_value(text: &str) -> Option<(&str, Option<&str>)> {
    let mut parts = text.split('=');
    let key = parts.next()?;
    let value = parts.next();
    if key.is_empty() || parts.next().is_some() {
        return None;
    }
    Some((key, value))
}

/// Ordered mount options of a single record
///
/// Updating an existing key keeps its position; new keys are appended.
#[derive(Debug, Clone, Default)]
pub struct OptionSet {
    entries: IndexMap<String, Option<String>>,
}

impl OptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Value of `key`: `None` if absent, `Some(None)` for a flag.
    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        self.entries.get(key).map(Option::as_deref)
    }

    /// Set `key`, replacing in place or appending at the end.
    pub fn set(&mut self, key: impl Into<String>, value: Option<String>) {
        self.entries.insert(key.into(), value);
    }

    /// Delete `key`, keeping the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> bool {
        self.entries.shift_remove(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_deref()))
    }
}

// Order is part of the value, unlike `IndexMap`'s own equality.
impl PartialEq for OptionSet {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for OptionSet {}

impl FromStr for OptionSet {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut set = Self::new();
        for segment in text.split(',').filter(|s| !s.is_empty()) {
            let (key, value) =
                split_key_value(segment).ok_or_else(|| ParseError::OptionNotUnderstood {
                    option: segment.to_string(),
                })?;
            set.set(key, value.map(ToOwned::to_owned));
        }
        Ok(set)
    }
}

impl fmt::Display for OptionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (key, value)) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            f.write_str(key)?;
            if let Some(value) = value {
                write!(f, "={value}")?;
            }
        }
        Ok(())
    }
}
