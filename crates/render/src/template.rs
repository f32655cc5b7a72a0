// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Jinja2-style template engine for documentation output.
//!
//! Templates use the usual Jinja2 syntax:
//!
//! - Variable interpolation: `{{ name }}`, `{{ metric.weight }}`
//! - Conditionals: `{% if docs.datastores %}...{% endif %}`
//! - Loops: `{% for trigger in docs.trigger %}...{% endfor %}`
//! - Filters: `{{ name | lower }}`, `{{ parts | select | join("/") }}`
//!
//! Block tags swallow the newline that follows them and the indentation
//! before them, so templates can be laid out one tag per line. Templates
//! whose name ends in `.html` are HTML-escaped.

use minijinja::Environment;
use serde::Serialize;
use thiserror::Error;

/// Template for the Markdown documentation
pub const DOCUMENTATION_TEMPLATE: &str = "documentation.md";

const DOCUMENTATION_SOURCE: &str = include_str!("../templates/documentation.md.j2");

/// Errors that can occur during template rendering.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template syntax error
    #[error("Template syntax error: {0}")]
    Syntax(String),

    /// Template name not registered
    #[error("Unknown template: {0}")]
    NotFound(String),

    /// Render error
    #[error("Render error: {0}")]
    Render(String),
}

impl From<minijinja::Error> for TemplateError {
    fn from(err: minijinja::Error) -> Self {
        let msg = err.to_string();
        match err.kind() {
            minijinja::ErrorKind::SyntaxError => TemplateError::Syntax(msg),
            minijinja::ErrorKind::TemplateNotFound => TemplateError::NotFound(msg),
            _ => TemplateError::Render(msg),
        }
    }
}

/// Template engine holding the registered templates.
#[derive(Debug, Clone)]
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::empty()
    }
}

impl TemplateEngine {
    /// Create an engine with no templates registered.
    pub fn empty() -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        Self { env }
    }

    /// Create an engine with the documentation templates registered.
    pub fn new() -> Result<Self, TemplateError> {
        let mut engine = Self::empty();
        engine.add_template(DOCUMENTATION_TEMPLATE, DOCUMENTATION_SOURCE)?;
        Ok(engine)
    }

    /// Register a template under a name.
    ///
    /// The template is parsed immediately, so syntax errors surface here.
    pub fn add_template(
        &mut self,
        name: &'static str,
        source: &'static str,
    ) -> Result<(), TemplateError> {
        self.env.add_template(name, source)?;
        Ok(())
    }

    /// Render a registered template with the given context.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let engine = TemplateEngine::new()?;
    /// let text = engine.render(DOCUMENTATION_TEMPLATE, minijinja::context! { docs })?;
    /// ```
    pub fn render<S: Serialize>(&self, name: &str, context: S) -> Result<String, TemplateError> {
        let tmpl = self.env.get_template(name)?;
        Ok(tmpl.render(context)?)
    }
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
