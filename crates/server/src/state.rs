// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared server state

use crate::pages::page_engine;
use pbdoc_core::{extract, parse_playbook, ExtractOptions};
use pbdoc_render::{
    generate_from_playbook, GenerateError, OutputFormat, Rendered, RenderError, Renderer,
    TemplateEngine,
};

/// Default request body limit; playbook exports easily exceed axum's 2 MiB
pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Markdown and HTML documentation for one playbook
#[derive(Debug, Clone)]
pub struct PageDocs {
    pub markdown: String,
    pub html: String,
}

/// State shared by all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub renderer: Renderer,
    pub pages: TemplateEngine,
    pub options: ExtractOptions,
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(options: ExtractOptions) -> Result<Self, RenderError> {
        Ok(Self {
            renderer: Renderer::new()?,
            pages: page_engine()?,
            options,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        })
    }

    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }

    /// Document a playbook for the web page.
    ///
    /// Extraction runs once; the HTML is converted from the Markdown.
    pub fn page_docs(&self, input: &str) -> Result<PageDocs, GenerateError> {
        let playbook = parse_playbook(input)?;
        let docs = extract(&playbook, &self.options)?;
        let markdown = self.renderer.markdown(&docs)?;
        let html = pbdoc_render::markdown_to_html(&markdown);
        Ok(PageDocs { markdown, html })
    }

    /// Document a playbook in the requested format
    pub fn render(&self, input: &str, format: OutputFormat) -> Result<Rendered, GenerateError> {
        let playbook = parse_playbook(input)?;
        generate_from_playbook(&self.renderer, &playbook, format, &self.options)
    }
}
