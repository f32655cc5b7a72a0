// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `pbdoc serve` - Web form for documenting playbooks

use crate::config::Config;
use crate::error::PbdocError;
use anyhow::Result;
use clap::Args;
use pbdoc_server::{AppState, ServerError};
use std::net::{Ipv4Addr, SocketAddr};

/// Address used when neither flag nor config names one
pub const DEFAULT_BIND: SocketAddr = SocketAddr::new(
    std::net::IpAddr::V4(Ipv4Addr::LOCALHOST),
    5000,
);

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to listen on [default: 127.0.0.1:5000]
    #[arg(long)]
    pub bind: Option<SocketAddr>,
}

pub async fn handle(args: ServeArgs, config: &Config) -> Result<()> {
    let addr = args.bind.or(config.server.bind).unwrap_or(DEFAULT_BIND);

    let mut state = AppState::new(config.extract.clone())?;
    if let Some(limit) = config.server.max_body_bytes {
        state = state.with_max_body_bytes(limit);
    }

    eprintln!("Serving playbook documenter on http://{}", addr);
    pbdoc_server::serve(addr, state).await.map_err(|e| match e {
        ServerError::Bind { addr, source } => PbdocError::bind_failed(addr, source).into(),
        other => anyhow::Error::new(other),
    })
}
