// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTML pages

use pbdoc_render::{TemplateEngine, TemplateError};
use serde::Serialize;

pub const INDEX_TEMPLATE: &str = "index.html";

const INDEX_SOURCE: &str = include_str!("../templates/index.html.j2");

/// Shown when the form is submitted without a playbook
pub const EMPTY_PLAYBOOK_MESSAGE: &str =
    "Please paste the text for a playbook to create documentation for it.";

/// Everything the index page can show
#[derive(Debug, Clone, Default, Serialize)]
pub struct IndexPage {
    /// Flash error
    pub error: Option<String>,
    /// Submitted playbook, echoed back into the form
    pub playbook: String,
    pub html_docs: Option<String>,
    pub markdown_docs: Option<String>,
}

impl IndexPage {
    pub fn error(message: impl Into<String>, playbook: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            playbook: playbook.into(),
            ..Default::default()
        }
    }
}

/// Create a template engine with the page templates registered
pub fn page_engine() -> Result<TemplateEngine, TemplateError> {
    let mut engine = TemplateEngine::empty();
    engine.add_template(INDEX_TEMPLATE, INDEX_SOURCE)?;
    Ok(engine)
}
