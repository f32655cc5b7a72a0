// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Documentation output: JSON, Markdown, and HTML

mod format;
mod generate;
mod html;
mod renderer;
mod template;

pub use format::{FormatError, OutputFormat};
pub use generate::{generate_documentation, generate_from_playbook, GenerateError};
pub use html::markdown_to_html;
pub use renderer::{
    render_html, render_json, render_markdown, RenderError, Rendered, Renderer,
    CUSTOM_METRICS_DOCS_URL,
};
pub use template::{TemplateEngine, TemplateError, DOCUMENTATION_TEMPLATE};
