// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! pbdoc - Playbook documenter CLI

mod commands;
mod completions;
mod config;
mod error;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{generate, serve};
use completions::CompletionsArgs;
use config::Config;
use error::PbdocError;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(
    name = "pbdoc",
    version,
    about = "Generate documentation for automation playbook exports"
)]
struct Cli {
    /// Configuration file [default: $PBDOC_CONFIG or ./pbdoc.toml]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Document a playbook export
    Generate(generate::GenerateArgs),
    /// Serve the web form
    Serve(serve::ServeArgs),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<PbdocError>() {
                Some(err) => eprint!("{}", err),
                None => eprintln!("error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    if let Commands::Completions(args) = &cli.command {
        completions::generate_completions::<Cli>(args.shell, &mut std::io::stdout());
        return Ok(());
    }

    let config = Config::load(cli.config.as_deref())
        .map_err(|e| PbdocError::config_invalid(&e.path().to_path_buf(), e))?;

    match cli.command {
        Commands::Generate(args) => generate::handle(args, &config),
        Commands::Serve(args) => serve::handle(args, &config).await,
        Commands::Completions(_) => Ok(()),
    }
}

/// Log to stderr so generated documentation on stdout stays clean.
fn setup_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
