// SPDX-License-Identifier: GPL-3.0-only

use serde::Serialize;
use storage_types::FstabEditOutcome;

/// JSON document printed on stdout for the calling tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct ModuleReport {
    pub changed: bool,
    pub message: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub failed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

impl ModuleReport {
    pub fn success(outcome: FstabEditOutcome) -> Self {
        Self {
            changed: outcome.changed,
            message: outcome.message,
            failed: false,
            msg: None,
        }
    }

    pub fn failure(error: &anyhow::Error) -> Self {
        let message = format!("{error:#}").trim_end().to_string();
        Self {
            changed: false,
            msg: Some(message.clone()),
            message,
            failed: true,
        }
    }
}
