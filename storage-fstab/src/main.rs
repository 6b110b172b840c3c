// SPDX-License-Identifier: GPL-3.0-only

//! fstab-options - edit the mount options of one fstab record
//!
//! Usable directly from a shell or as an out-of-process automation module
//! that receives a JSON parameters file and answers with a JSON result.

use std::process::ExitCode;

use std::ffi::OsString;

use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use storage_types::FstabEditOutcome;

mod config;
mod logging;
mod report;

use config::Cli;
use report::ModuleReport;

fn parse_cli<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args)
}

fn run(cli: &Cli) -> Result<FstabEditOutcome> {
    let request = cli.load_request()?;
    tracing::debug!(?request, "loaded request");
    Ok(storage_sys::edit_fstab(&request)?)
}

fn main() -> ExitCode {
    let report = match parse_cli(std::env::args_os()) {
        Ok(cli) => {
            logging::init(cli.log_level);
            match run(&cli) {
                Ok(outcome) => ModuleReport::success(outcome),
                Err(e) => {
                    tracing::error!("fstab edit failed: {e:#}");
                    ModuleReport::failure(&e)
                }
            }
        }
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => ModuleReport::failure(&anyhow::Error::new(e)),
    };

    match serde_json::to_string(&report) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("fstab-options: failed to serialize result: {e}");
            return ExitCode::FAILURE;
        }
    }

    if report.failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
