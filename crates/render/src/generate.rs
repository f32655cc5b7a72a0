// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Playbook to documentation in one call

use crate::format::OutputFormat;
use crate::renderer::{RenderError, Rendered, Renderer};
use pbdoc_core::{extract, parse_playbook, ExtractError, ExtractOptions, ParseError, Playbook};
use thiserror::Error;
use tracing::info;

/// Errors from any stage of documentation generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Generate documentation for a playbook given as JSON text.
///
/// # Example
///
/// ```ignore
/// let markdown = generate_documentation(&export, OutputFormat::Markdown)?;
/// println!("{}", markdown);
/// ```
pub fn generate_documentation(
    input: &str,
    format: OutputFormat,
) -> Result<Rendered, GenerateError> {
    let playbook = parse_playbook(input)?;
    let renderer = Renderer::new()?;
    generate_from_playbook(&renderer, &playbook, format, &ExtractOptions::default())
}

/// Generate documentation for an already parsed playbook.
pub fn generate_from_playbook(
    renderer: &Renderer,
    playbook: &Playbook,
    format: OutputFormat,
    options: &ExtractOptions,
) -> Result<Rendered, GenerateError> {
    let docs = extract(playbook, options)?;
    info!(
        playbook = playbook.name.as_deref().unwrap_or("<unnamed>"),
        %format,
        "generated documentation"
    );
    Ok(renderer.render(&docs, format)?)
}

#[cfg(test)]
#[path = "generate_tests.rs"]
mod tests;
