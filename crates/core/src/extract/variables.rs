// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Variable extraction

use crate::docs::{InternalVariable, PlaybookVariables, Variable};
use crate::playbook::{Job, Playbook};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use tracing::{debug, warn};

use super::{ExtractError, ExtractOptions};

// Regex pattern for ${USER:TEXT:name} / ${ORGANIZATION:KEYCHAIN:name}
// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static VARIABLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{(USER|ORGANIZATION):(KEYCHAIN|TEXT):([^}]*)\}")
        .expect("constant regex pattern is valid")
});

/// Name of the SetVariable parameter holding the declarations
const VARIABLE_MAPPING_PARAM: &str = "variable_mapping";

/// Collect the user and organization variables referenced by any job.
///
/// Every string parameter value is scanned, so a value that embeds several
/// variables documents all of them. Within each list a name/type pair is
/// reported once, at its first appearance.
pub fn variable_docs(playbook: &Playbook) -> PlaybookVariables {
    let mut variables = PlaybookVariables::default();

    let values = playbook
        .job_list
        .iter()
        .flat_map(|job| &job.job_parameter_list)
        .filter_map(|param| param.text());

    for value in values {
        for caps in VARIABLE_PATTERN.captures_iter(value) {
            let name = &caps[3];
            if name.is_empty() {
                continue;
            }
            let variable = Variable {
                kind: caps[2].to_lowercase(),
                name: name.to_string(),
            };
            let list = match &caps[1] {
                "USER" => &mut variables.user_variables,
                _ => &mut variables.org_variables,
            };
            if !list.contains(&variable) {
                list.push(variable);
            }
        }
    }

    variables
}

/// Collect the variables declared by SetVariable apps.
///
/// The declarations live in the `variable_mapping` parameter as a JSON
/// encoded list of `{ key, value }` entries.
pub fn internal_variable_docs(
    playbook: &Playbook,
    options: &ExtractOptions,
) -> Result<Vec<InternalVariable>, ExtractError> {
    let mut declared = Vec::new();

    for job in &playbook.job_list {
        let is_set_variable = options
            .set_variable_programs
            .iter()
            .any(|fragment| job.program_name_contains(fragment));
        if !is_set_variable {
            continue;
        }

        let Some(mapping) = job.find_parameter(VARIABLE_MAPPING_PARAM) else {
            warn!(
                app = job.display_name(),
                "SetVariable app has no variable_mapping, skipping"
            );
            continue;
        };

        let entries = parse_mapping(job, mapping)?;
        debug!(app = job.display_name(), count = entries.len(), "declared variables");
        declared.extend(entries);
    }

    Ok(declared)
}

/// The mapping is usually a JSON string, but decoded lists are accepted too.
fn parse_mapping(job: &Job, mapping: &Value) -> Result<Vec<InternalVariable>, ExtractError> {
    let parsed = match mapping {
        Value::String(text) if text.trim().is_empty() => Ok(Vec::new()),
        Value::String(text) => serde_json::from_str(text),
        other => serde_json::from_value(other.clone()),
    };
    parsed.map_err(|source| ExtractError::VariableMapping {
        job: job.display_name().to_string(),
        source,
    })
}

#[cfg(test)]
#[path = "variables_tests.rs"]
mod tests;
