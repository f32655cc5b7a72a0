// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON parsing for playbook exports.

use super::types::Playbook;
use serde_json::Value;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON syntax or shape error
    #[error("invalid playbook JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The document is valid JSON but not an object
    #[error("playbook must be a JSON object, found {0}")]
    NotAnObject(&'static str),

    /// IO error reading file
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Parse a playbook from JSON text.
///
/// # Example
///
/// ```ignore
/// let playbook = parse_playbook(r#"{"name": "Triage", "jobList": []}"#)?;
/// assert_eq!(playbook.name.as_deref(), Some("Triage"));
/// ```
pub fn parse_playbook(content: &str) -> Result<Playbook, ParseError> {
    let value: Value = serde_json::from_str(content)?;
    parse_playbook_value(value)
}

/// Parse a playbook from an already decoded JSON document.
pub fn parse_playbook_value(value: Value) -> Result<Playbook, ParseError> {
    if !value.is_object() {
        return Err(ParseError::NotAnObject(json_kind(&value)));
    }
    Ok(serde_json::from_value(value)?)
}

/// Parse a playbook from a file.
pub fn parse_playbook_file(path: &Path) -> Result<Playbook, ParseError> {
    let content = std::fs::read_to_string(path).map_err(|e| ParseError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_playbook(&content)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
