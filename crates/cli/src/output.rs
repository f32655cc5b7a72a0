// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Writing rendered documentation

use pbdoc_render::Rendered;
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

/// Write documentation to `path`, or stdout when no path is given.
pub fn write_rendered(rendered: &Rendered, path: Option<&Path>) -> io::Result<()> {
    let text = rendered.to_string();
    match path {
        Some(path) => {
            std::fs::write(path, text.as_bytes())?;
            info!(path = %path.display(), bytes = text.len(), "wrote documentation");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
