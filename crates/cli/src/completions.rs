// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell completion generation for the pbdoc CLI.
//!
//! ```bash
//! pbdoc completions bash > ~/.local/share/bash-completion/completions/pbdoc
//! pbdoc completions zsh > ~/.zfunc/_pbdoc
//! pbdoc completions fish > ~/.config/fish/completions/pbdoc.fish
//! ```

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io::Write;

/// Write shell completions for the CLI `C`.
pub fn generate_completions<C: CommandFactory>(shell: Shell, out: &mut dyn Write) {
    let mut cmd = C::command();
    generate(shell, &mut cmd, "pbdoc", out);
}

/// Arguments for the completions command.
#[derive(clap::Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
