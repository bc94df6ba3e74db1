//! HTTP Server

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use axum_server::Handle;
use clap::Parser;
use tokio::signal;
use tracing::debug;

pub mod errors;
pub mod handlers;
pub mod open_api;
pub mod servers;
pub mod state;

/// Configuration for the HTTP servers.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
pub struct HttpServerConfig {
    /// The port the plain HTTP redirect server listens on
    #[arg(long, env = "HTTP_PORT", default_value = "3000")]
    pub http_port: u16,

    /// The port the HTTPS API server listens on
    #[arg(long, env = "HTTPS_PORT", default_value = "3443")]
    pub https_port: u16,

    /// The public base URL plain HTTP requests are redirected to
    #[arg(long, env = "BASE_URL", default_value = "https://localhost:3443")]
    pub base_url: String,

    /// Path to the PEM encoded TLS certificate
    #[arg(long, env = "TLS_CERT_PATH")]
    pub cert_path: String,

    /// Path to the PEM encoded TLS private key
    #[arg(long, env = "TLS_KEY_PATH")]
    pub key_path: String,
}

/// A server that runs until it fails or is asked to shut down
#[async_trait]
pub trait Server {
    /// Runs the server.
    async fn run(self) -> Result<()>;
}

/// Resolves on Ctrl+C or SIGTERM, starting a graceful shutdown of `handle`
#[mutants::skip]
pub async fn shutdown_signal(handle: Option<Handle>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    if let Some(handle) = handle {
        debug!("shutting down gracefully");
        handle.graceful_shutdown(Some(Duration::from_secs(10)));
    }
}
