// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Documentation extraction.
//!
//! Each pass is an independent linear scan over the job graph:
//!
//! - **triggers**: trigger types and HTTP request parts used by apps
//! - **apps**: custom metrics and datastores, recognized by catalog name
//! - **variables**: user/organization variables and SetVariable declarations
//!
//! [`extract`] runs all of them and assembles a [`Documentation`].

pub mod apps;
pub mod triggers;
pub mod variables;

pub use apps::{custom_metric_docs, datastore_docs};
pub use triggers::{http_link_docs, trigger_docs, HTTP_LINK_TRIGGER};
pub use variables::{internal_variable_docs, variable_docs};

use crate::docs::Documentation;
use crate::playbook::Playbook;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during extraction.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// A SetVariable job carries a mapping that is not a list of key/value entries
    #[error("invalid variable_mapping in job '{job}': {source}")]
    VariableMapping {
        job: String,
        #[source]
        source: serde_json::Error,
    },

    /// A job could not be serialized for reference scanning
    #[error("failed to scan job '{job}': {source}")]
    Serialize {
        job: String,
        #[source]
        source: serde_json::Error,
    },

    /// A reference pattern could not be compiled
    #[error("invalid reference pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// How apps are recognized in the job graph.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    /// Display name fragments that mark a custom metric app
    pub custom_metric_apps: Vec<String>,
    /// Exact display names of datastore apps
    pub datastore_apps: Vec<String>,
    /// Program name fragments that mark a SetVariable app
    pub set_variable_programs: Vec<String>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            custom_metric_apps: vec!["ThreatConnect Custom".to_string()],
            datastore_apps: vec!["Data Store".to_string(), "DataStore".to_string()],
            set_variable_programs: vec!["SetVariable".to_string()],
        }
    }
}

/// Run every extraction pass over a playbook.
pub fn extract(
    playbook: &Playbook,
    options: &ExtractOptions,
) -> Result<Documentation, ExtractError> {
    let mut docs = Documentation {
        trigger: trigger_docs(playbook),
        ..Default::default()
    };

    if docs.has_trigger(HTTP_LINK_TRIGGER) {
        docs.http_link = http_link_docs(playbook)?;
    }

    docs.custom_metrics = custom_metric_docs(playbook, options);
    docs.datastores = datastore_docs(playbook, options);
    docs.variables = variable_docs(playbook);
    docs.internal_variables = internal_variable_docs(playbook, options)?;

    debug!(
        jobs = playbook.job_list.len(),
        triggers = docs.trigger.len(),
        http_link = docs.http_link.len(),
        custom_metrics = docs.custom_metrics.len(),
        datastores = docs.datastores.len(),
        user_variables = docs.variables.user_variables.len(),
        org_variables = docs.variables.org_variables.len(),
        internal_variables = docs.internal_variables.len(),
        "extracted playbook documentation"
    );

    Ok(docs)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
