// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Documentation model.
//!
//! `Documentation` is what every output format is rendered from. Its JSON
//! form omits any section that found nothing.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Documentation extracted from a playbook
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Documentation {
    /// Trigger types, in document order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trigger: Vec<String>,
    /// Parts of the triggering HTTP request consumed by apps
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub http_link: Vec<HttpLinkUsage>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_metrics: Vec<CustomMetric>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub datastores: Vec<Datastore>,
    /// User and organization variables the playbook expects
    #[serde(default, skip_serializing_if = "PlaybookVariables::is_empty")]
    pub variables: PlaybookVariables,
    /// Variables declared inside the playbook
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub internal_variables: Vec<InternalVariable>,
}

impl Documentation {
    /// True when no section found anything
    pub fn is_empty(&self) -> bool {
        self.trigger.is_empty()
            && self.http_link.is_empty()
            && self.custom_metrics.is_empty()
            && self.datastores.is_empty()
            && self.variables.is_empty()
            && self.internal_variables.is_empty()
    }

    /// Check whether the playbook has a trigger of the given type
    pub fn has_trigger(&self, kind: &str) -> bool {
        self.trigger.iter().any(|t| t == kind)
    }
}

/// One reference from an app to part of the triggering HTTP request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpLinkUsage {
    /// Request part, e.g. `body`, `method`, `params.name`
    pub part: String,
    /// Name of the app using it
    pub app: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomMetric {
    pub name: Option<String>,
    pub weight: Option<String>,
    pub date: Option<String>,
    pub value: Option<String>,
    pub key: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Datastore {
    pub type_name: Option<String>,
    pub domain_type: Option<String>,
    pub db_method: Option<String>,
    pub path: Option<String>,
    pub request_entity: Option<String>,
    pub organization_name: Option<String>,
}

/// Variables supplied from outside the playbook
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybookVariables {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub user_variables: Vec<Variable>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub org_variables: Vec<Variable>,
}

impl PlaybookVariables {
    pub fn is_empty(&self) -> bool {
        self.user_variables.is_empty() && self.org_variables.is_empty()
    }
}

/// A `${USER:...}` or `${ORGANIZATION:...}` reference
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variable {
    /// `text` or `keychain`
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
}

/// A variable declared by a SetVariable app
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternalVariable {
    pub key: String,
    #[serde(default)]
    pub value: Value,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

#[cfg(test)]
#[path = "docs_tests.rs"]
mod tests;
