// SPDX-License-Identifier: GPL-3.0-only

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Which way a file was being opened when it failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read,
    Write,
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => f.write_str("read"),
            Self::Write => f.write_str("write"),
        }
    }
}

/// Malformed option field or directive text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("option not understood, nothing done: {option}")]
    OptionNotUnderstood { option: String },

    #[error("change not understood, nothing done: {change}")]
    ChangeNotUnderstood { change: String },
}

/// Error types for fstab operations
#[derive(Error, Debug)]
pub enum SysError {
    #[error("{} when opening for {access} {}", source.kind(), path.display())]
    Io {
        access: Access,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("parse error in fstab line {line_number}: {content}")]
    Structural { line_number: usize, content: String },
}

impl SysError {
    pub(crate) fn io(access: Access, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            access,
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for fstab operations
pub type Result<T> = std::result::Result<T, SysError>;
