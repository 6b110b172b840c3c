// SPDX-License-Identifier: GPL-3.0-only

//! Directive parser
//!
//! A directive is a whitespace separated list of `[+|-]key[=value]` tokens.
//! Token order is kept: it decides which change wins when several touch
//! the same key.

use storage_types::{OptionAction, OptionChange};

use super::options::split_key_value;
use crate::error::ParseError;

/// Parse a directive into changes, in the order they were written.
pub fn parse_directive(text: &str) -> Result<Vec<OptionChange>, ParseError> {
    text.split_whitespace().map(parse_token).collect()
}

fn parse_token(token: &str) -> Result<OptionChange, ParseError> {
    let (action, body) = if let Some(rest) = token.strip_prefix('+') {
        (OptionAction::Add, rest)
    } else if let Some(rest) = token.strip_prefix('-') {
        (OptionAction::Remove, rest)
    } else {
        (OptionAction::Add, token)
    };

    let (key, value) = split_key_value(body).ok_or_else(|| ParseError::ChangeNotUnderstood {
        change: token.to_string(),
    })?;

    Ok(OptionChange {
        action,
        key: key.to_string(),
        value: value.map(ToOwned::to_owned),
    })
}
