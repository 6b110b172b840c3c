// SPDX-License-Identifier: GPL-3.0-only

use tracing_subscriber::EnvFilter;

use crate::config::LoggingLevel;

/// Install the stderr subscriber; stdout carries the JSON result.
pub(crate) fn init(level: LoggingLevel) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn default_directives(level: LoggingLevel) -> String {
    let level = level.as_directive();
    format!("warn,storage_sys={level},fstab_options={level}")
}
