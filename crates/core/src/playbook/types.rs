// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Playbook types that mirror the exported JSON structure.
//!
//! Exports are loosely typed: lists may be missing or `null`, parameter
//! values may be strings, numbers, or nested JSON. Every field is therefore
//! optional or defaulted, and unknown fields are preserved so a job can be
//! re-serialized without losing the string-embedded references it carries.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A playbook definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playbook {
    /// Display name of the playbook
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Triggers that start the playbook
    #[serde(default, deserialize_with = "null_as_default")]
    pub playbook_trigger_list: Vec<Trigger>,
    /// Configured app instances
    #[serde(default, deserialize_with = "null_as_default")]
    pub job_list: Vec<Job>,
    /// Everything else in the export
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Playbook {
    /// Get the first trigger of the given type
    pub fn trigger_of_type(&self, kind: &str) -> Option<&Trigger> {
        self.playbook_trigger_list
            .iter()
            .find(|t| t.kind.as_deref() == Some(kind))
    }
}

/// A trigger binding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trigger {
    /// Trigger id, numeric in most exports
    #[serde(default)]
    pub id: Value,
    /// Trigger type (e.g. `HttpLink`, `UserAction`, `MailTrigger`)
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Trigger {
    /// The id as it appears inside string references (`"42"` for `42`).
    pub fn id_text(&self) -> Option<String> {
        value_text(&self.id)
    }
}

/// A configured app instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub app_catalog_item: AppCatalogItem,
    #[serde(default, deserialize_with = "null_as_default")]
    pub job_parameter_list: Vec<JobParameter>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Job {
    /// Job name, or an empty string for unnamed jobs
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Find the value of the first parameter with the given name.
    ///
    /// Returns `None` when no parameter matches or its value is `null`.
    pub fn find_parameter(&self, name: &str) -> Option<&Value> {
        self.job_parameter_list
            .iter()
            .find(|p| p.name() == Some(name))
            .map(|p| &p.value)
            .filter(|v| !v.is_null())
    }

    /// Find a parameter value and normalize it to text.
    ///
    /// Empty strings are treated as unset.
    pub fn parameter_text(&self, name: &str) -> Option<String> {
        self.find_parameter(name).and_then(value_text)
    }

    /// Check whether the app display name contains the given fragment
    pub fn display_name_contains(&self, fragment: &str) -> bool {
        self.app_catalog_item
            .display_name
            .as_deref()
            .is_some_and(|n| n.contains(fragment))
    }

    /// Check whether the app program name contains the given fragment
    pub fn program_name_contains(&self, fragment: &str) -> bool {
        self.app_catalog_item
            .program_name
            .as_deref()
            .is_some_and(|n| n.contains(fragment))
    }
}

/// The catalog entry a job was created from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppCatalogItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A configured parameter on a job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobParameter {
    #[serde(default, deserialize_with = "null_as_default")]
    pub app_catalog_item_parameter: ParameterDef,
    #[serde(default)]
    pub value: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl JobParameter {
    pub fn name(&self) -> Option<&str> {
        self.app_catalog_item_parameter.param_name.as_deref()
    }

    /// The value if it is a string
    pub fn text(&self) -> Option<&str> {
        self.value.as_str()
    }
}

/// Catalog definition of a parameter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Render a loosely typed JSON value as text.
///
/// Strings are returned verbatim, scalars in their JSON form, and nested
/// structures as compact JSON. `null` and `""` yield `None`.
pub(crate) fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}

/// Deserialize `null` the same way as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
