// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `pbdoc generate [FILE]` - Document a playbook export

use crate::config::Config;
use crate::error::PbdocError;
use crate::output::write_rendered;
use anyhow::Result;
use clap::Args;
use pbdoc_core::parse_playbook;
use pbdoc_render::{generate_from_playbook, GenerateError, OutputFormat, Renderer};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Placeholder path meaning stdin
pub const STDIN: &str = "-";

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Exported playbook JSON ("-" reads stdin)
    #[arg(default_value = STDIN)]
    pub input: PathBuf,

    /// Output format: json, markdown (md), or html
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Write documentation to this file instead of stdout; a .json, .md or
    /// .html extension picks the format when --format is not given
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl GenerateArgs {
    /// Flag first, then the output file extension, then config, then JSON.
    pub fn resolve_format(&self, config: &Config) -> OutputFormat {
        self.format
            .or_else(|| self.output.as_deref().and_then(OutputFormat::from_path))
            .or(config.output.format)
            .unwrap_or_default()
    }
}

pub fn handle(args: GenerateArgs, config: &Config) -> Result<()> {
    let format = args.resolve_format(config);
    let input = read_input(&args.input)?;
    let origin = describe_input(&args.input);
    debug!(input = %origin, bytes = input.len(), %format, "generating documentation");

    let playbook =
        parse_playbook(&input).map_err(|e| PbdocError::invalid_playbook(&origin, e))?;
    let renderer = Renderer::new()?;
    let rendered = generate_from_playbook(&renderer, &playbook, format, &config.extract)
        .map_err(|e| match e {
            GenerateError::Render(_) => anyhow::Error::new(e),
            other => PbdocError::invalid_playbook(&origin, other).into(),
        })?;

    write_rendered(&rendered, args.output.as_deref())?;
    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new(STDIN) {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        return Ok(input);
    }
    std::fs::read_to_string(path).map_err(|e| PbdocError::input_not_found(path, e).into())
}

fn describe_input(path: &Path) -> String {
    if path == Path::new(STDIN) {
        "stdin".to_string()
    } else {
        format!("'{}'", path.display())
    }
}
