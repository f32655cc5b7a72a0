// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Web front end for the playbook documenter
//!
//! A form that takes a pasted playbook export and shows its documentation,
//! plus a small JSON API for scripted use.

mod pages;
mod routes;
mod state;

use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{info, warn};

pub use pages::{IndexPage, EMPTY_PLAYBOOK_MESSAGE};
pub use routes::router;
pub use state::{AppState, PageDocs, DEFAULT_MAX_BODY_BYTES};

/// Errors that can occur while running the server
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Serve the web front end until Ctrl-C.
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<(), ServerError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
}
