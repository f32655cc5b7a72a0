// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Trigger and HTTP link extraction

use crate::docs::HttpLinkUsage;
use crate::playbook::Playbook;
use regex::Regex;
use tracing::{debug, warn};

use super::ExtractError;

/// Trigger type of playbooks started by an HTTP request
pub const HTTP_LINK_TRIGGER: &str = "HttpLink";

/// Collect the type of every trigger, skipping untyped ones.
pub fn trigger_docs(playbook: &Playbook) -> Vec<String> {
    playbook
        .playbook_trigger_list
        .iter()
        .filter_map(|t| t.kind.as_deref())
        .filter(|kind| !kind.is_empty())
        .map(String::from)
        .collect()
}

/// Find which apps use which parts of the triggering HTTP request.
///
/// Apps refer to the request as `<linkId>:trg.http.<part>!<Type>` somewhere
/// inside their configuration, so each job is serialized and scanned. Only
/// the first `HttpLink` trigger is considered. Every reference is reported,
/// in job order and then in the order it appears in the job.
pub fn http_link_docs(playbook: &Playbook) -> Result<Vec<HttpLinkUsage>, ExtractError> {
    let Some(trigger) = playbook.trigger_of_type(HTTP_LINK_TRIGGER) else {
        return Ok(Vec::new());
    };
    let Some(link_id) = trigger.id_text() else {
        warn!("HttpLink trigger has no id, skipping request part lookup");
        return Ok(Vec::new());
    };

    let pattern = Regex::new(&format!(
        r"{}:trg\.http\.(.*?)!",
        regex::escape(&link_id)
    ))?;

    let mut usages = Vec::new();
    for job in &playbook.job_list {
        let serialized = serde_json::to_string(job).map_err(|source| {
            ExtractError::Serialize {
                job: job.display_name().to_string(),
                source,
            }
        })?;
        for caps in pattern.captures_iter(&serialized) {
            let start = caps.get(0).map_or(0, |m| m.start());
            if !starts_reference(&serialized, start) {
                continue;
            }
            usages.push(HttpLinkUsage {
                part: caps[1].to_string(),
                app: job.display_name().to_string(),
            });
        }
    }

    debug!(link_id = %link_id, usages = usages.len(), "resolved http link references");
    Ok(usages)
}

/// The id must not be the tail of a longer id (link 1 vs link 21).
///
/// Checked by hand so that back-to-back references both match.
fn starts_reference(text: &str, start: usize) -> bool {
    !matches!(
        text[..start].chars().next_back(),
        Some(c) if c.is_ascii_alphanumeric() || c == '_'
    )
}

#[cfg(test)]
#[path = "triggers_tests.rs"]
mod tests;
