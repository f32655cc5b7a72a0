// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! Each error carries what went wrong, why it might have happened, and how
//! to fix it.

use std::fmt;
use std::net::SocketAddr;
use std::path::Path;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct PbdocError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
    /// Original error if any
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl PbdocError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    /// Add context about why this error might have happened.
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    /// Add a suggestion for how to fix this error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Set the source error that caused this error.
    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for PbdocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for PbdocError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Common error builders for typical failure scenarios.
impl PbdocError {
    /// Error for when the playbook file cannot be read.
    pub fn input_not_found(path: &Path, source: std::io::Error) -> Self {
        let message = format!("Cannot read playbook '{}'", path.display());
        PbdocError::new(message)
            .with_context(source.to_string())
            .with_suggestion("Check the path to the exported playbook")
            .with_suggestion("Pass '-' to read the playbook from stdin")
            .with_source(source)
    }

    /// Error for when the input is not a playbook export.
    pub fn invalid_playbook<E: std::error::Error + Send + Sync + 'static>(
        origin: &str,
        source: E,
    ) -> Self {
        PbdocError::new(format!("Cannot document playbook from {}", origin))
            .with_context(source.to_string())
            .with_suggestion("Export the playbook as JSON from the playbook designer")
            .with_suggestion("The export must be a single JSON object")
            .with_source(source)
    }

    /// Error for when the config file is unreadable or invalid.
    pub fn config_invalid<E: std::error::Error + Send + Sync + 'static>(
        path: &Path,
        source: E,
    ) -> Self {
        PbdocError::new(format!("Invalid configuration in '{}'", path.display()))
            .with_context(source.to_string())
            .with_suggestion("Valid sections are [output], [extract] and [server]")
            .with_suggestion("Pass a different file with --config")
            .with_source(source)
    }

    /// Error for when the server cannot listen.
    pub fn bind_failed<E: std::error::Error + Send + Sync + 'static>(
        addr: SocketAddr,
        source: E,
    ) -> Self {
        PbdocError::new(format!("Cannot listen on {}", addr))
            .with_context(source.to_string())
            .with_context("Another process may already be using the port")
            .with_suggestion("Choose another address: pbdoc serve --bind 127.0.0.1:5001")
            .with_source(source)
    }
}
