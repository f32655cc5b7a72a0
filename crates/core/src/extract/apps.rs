// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Custom metric and datastore extraction
//!
//! Both app kinds are recognized by their catalog display name and
//! documented from a fixed set of parameters.

use crate::docs::{CustomMetric, Datastore};
use crate::playbook::{Job, Playbook};
use tracing::debug;

use super::ExtractOptions;

/// Document every custom metric app.
///
/// An app is a custom metric app when its display name contains one of
/// `options.custom_metric_apps`.
pub fn custom_metric_docs(playbook: &Playbook, options: &ExtractOptions) -> Vec<CustomMetric> {
    playbook
        .job_list
        .iter()
        .filter(|job| {
            options
                .custom_metric_apps
                .iter()
                .any(|fragment| job.display_name_contains(fragment))
        })
        .map(custom_metric)
        .collect()
}

/// Document every datastore app.
///
/// Unlike custom metrics, datastore display names must match exactly.
pub fn datastore_docs(playbook: &Playbook, options: &ExtractOptions) -> Vec<Datastore> {
    playbook
        .job_list
        .iter()
        .filter(|job| {
            job.app_catalog_item
                .display_name
                .as_deref()
                .is_some_and(|name| options.datastore_apps.iter().any(|d| d == name))
        })
        .map(datastore)
        .collect()
}

fn custom_metric(job: &Job) -> CustomMetric {
    debug!(app = job.display_name(), "documenting custom metric");
    CustomMetric {
        name: job.parameter_text("metric_name"),
        weight: job.parameter_text("metric_weight"),
        date: job.parameter_text("metric_date"),
        value: job.parameter_text("metric_value"),
        key: job.parameter_text("metric_key"),
    }
}

fn datastore(job: &Job) -> Datastore {
    debug!(app = job.display_name(), "documenting datastore");
    Datastore {
        type_name: job.parameter_text("type_name"),
        domain_type: job.parameter_text("domain_type"),
        db_method: job.parameter_text("db_method"),
        path: job.parameter_text("path"),
        request_entity: job.parameter_text("request_entity"),
        organization_name: job.parameter_text("organization_name"),
    }
}

#[cfg(test)]
#[path = "apps_tests.rs"]
mod tests;
