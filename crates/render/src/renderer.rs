// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Documentation rendering

use crate::format::OutputFormat;
use crate::html::markdown_to_html;
use crate::template::{TemplateEngine, TemplateError, DOCUMENTATION_TEMPLATE};
use minijinja::context;
use pbdoc_core::Documentation;
use serde_json::Value;
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Where the custom metrics section links to
pub const CUSTOM_METRICS_DOCS_URL: &str =
    "https://docs.threatconnect.com/en/latest/rest_api/custom_metrics/custom_metrics.html#custom-metrics";

/// Errors that can occur during rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("failed to encode documentation as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Rendered documentation.
///
/// JSON output stays structured so callers can embed it; the other formats
/// are text.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    Json(Value),
    Text(String),
}

impl Rendered {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Rendered::Json(_) => None,
            Rendered::Text(text) => Some(text),
        }
    }

    pub fn into_json(self) -> Option<Value> {
        match self {
            Rendered::Json(value) => Some(value),
            Rendered::Text(_) => None,
        }
    }
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rendered::Json(value) => {
                let text = serde_json::to_string_pretty(value).map_err(|_| fmt::Error)?;
                writeln!(f, "{}", text)
            }
            Rendered::Text(text) => f.write_str(text),
        }
    }
}

/// Renders documentation in any output format.
#[derive(Debug, Clone)]
pub struct Renderer {
    engine: TemplateEngine,
}

impl Renderer {
    pub fn new() -> Result<Self, RenderError> {
        Ok(Self {
            engine: TemplateEngine::new()?,
        })
    }

    /// Render documentation in the given format
    pub fn render(
        &self,
        docs: &Documentation,
        format: OutputFormat,
    ) -> Result<Rendered, RenderError> {
        debug!(%format, "rendering documentation");
        match format {
            OutputFormat::Json => Ok(Rendered::Json(self.json(docs)?)),
            OutputFormat::Markdown => Ok(Rendered::Text(self.markdown(docs)?)),
            OutputFormat::Html => Ok(Rendered::Text(self.html(docs)?)),
        }
    }

    pub fn json(&self, docs: &Documentation) -> Result<Value, RenderError> {
        Ok(serde_json::to_value(docs)?)
    }

    /// Render documentation as Markdown.
    ///
    /// Sections without content are left out. The output ends with a single
    /// newline.
    pub fn markdown(&self, docs: &Documentation) -> Result<String, RenderError> {
        let text = self.engine.render(
            DOCUMENTATION_TEMPLATE,
            context! {
                docs => docs,
                custom_metrics_docs_url => CUSTOM_METRICS_DOCS_URL,
            },
        )?;
        let mut out = text.trim_end().to_string();
        out.push('\n');
        Ok(out)
    }

    /// Render documentation as an HTML fragment
    pub fn html(&self, docs: &Documentation) -> Result<String, RenderError> {
        Ok(markdown_to_html(&self.markdown(docs)?))
    }
}

/// Render documentation as pretty-printed JSON text
pub fn render_json(docs: &Documentation) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(docs)?)
}

/// Render documentation as Markdown
pub fn render_markdown(docs: &Documentation) -> Result<String, RenderError> {
    Renderer::new()?.markdown(docs)
}

/// Render documentation as HTML
pub fn render_html(docs: &Documentation) -> Result<String, RenderError> {
    Renderer::new()?.html(docs)
}

#[cfg(test)]
#[path = "renderer_tests.rs"]
mod tests;
