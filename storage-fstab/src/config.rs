// SPDX-License-Identifier: GPL-3.0-only

//! Invocation parameters
//!
//! Parameters come from an optional JSON document (the way an automation
//! tool hands arguments to an out-of-process module) and from command line
//! flags. Flags win over the document.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use storage_types::{DEFAULT_FSTAB_PATH, FstabEditRequest};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LoggingLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LoggingLevel {
    pub fn as_directive(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "fstab-options")]
#[command(version)]
#[command(about = "Add, replace or remove mount options of one fstab record")]
pub struct Cli {
    /// JSON parameters document with `path`, `options`, `fstab` and `backup` keys
    pub args_file: Option<PathBuf>,

    /// Mount point of the record to edit
    #[arg(long)]
    pub path: Option<String>,

    /// Directive, e.g. "+nodev -noauto +uid=1000"
    #[arg(long, allow_hyphen_values = true)]
    pub options: Option<String>,

    /// Table file to edit [default: /etc/fstab]
    #[arg(long)]
    pub fstab: Option<PathBuf>,

    /// Copy the original table here before editing
    #[arg(long)]
    pub backup: Option<PathBuf>,

    /// Report what would change without writing anything
    #[arg(long)]
    pub dry_run: bool,

    #[arg(long, value_enum, default_value_t = LoggingLevel::Info)]
    pub log_level: LoggingLevel,
}

/// Parameters document; every key is optional so flags can fill the gaps.
#[derive(Debug, Default, Deserialize)]
struct ParamsFile {
    path: Option<String>,
    options: Option<String>,
    fstab: Option<PathBuf>,
    backup: Option<PathBuf>,
    #[serde(default)]
    dry_run: bool,
    #[serde(default, rename = "_ansible_check_mode")]
    check_mode: bool,
}

fn read_params_file(path: &Path) -> Result<ParamsFile> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read parameters file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("invalid parameters file {}", path.display()))
}

impl Cli {
    /// Combine the parameters document and flags into one request.
    pub fn load_request(&self) -> Result<FstabEditRequest> {
        let params = match &self.args_file {
            Some(path) => read_params_file(path)?,
            None => ParamsFile::default(),
        };

        let Some(path) = self.path.clone().or(params.path) else {
            bail!("missing required parameter: path");
        };
        let Some(options) = self.options.clone().or(params.options) else {
            bail!("missing required parameter: options");
        };

        Ok(FstabEditRequest {
            path,
            options,
            fstab: self
                .fstab
                .clone()
                .or(params.fstab)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_FSTAB_PATH)),
            backup: self.backup.clone().or(params.backup),
            dry_run: self.dry_run || params.dry_run || params.check_mode,
        })
    }
}
