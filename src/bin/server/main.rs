#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! REST API for sending email messages

use std::{
    net::{Ipv4Addr, SocketAddr},
    sync::Arc,
};

use anyhow::{anyhow, Result};
use clap::Parser;
use mail_sender::{
    domain::communication::{
        email_addresses::PatternAddressValidator,
        messages::{MessageComposer, MessageServiceImpl},
    },
    infrastructure::{
        email::smtp::{SMTPConfig, SMTPMailer},
        files::local::LocalFileStore,
        http::{
            servers::{http::HttpServer, https::HttpsServer},
            state::AppState,
            HttpServerConfig, Server,
        },
    },
};
use tracing::error;

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
pub struct Args {
    /// The HTTP server configuration
    #[clap(flatten)]
    pub server: HttpServerConfig,

    /// The SMTP configuration
    #[clap(flatten)]
    pub smtp: SMTPConfig,
}

#[mutants::skip]
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    rustls::crypto::ring::default_provider()
        .install_default()
        .map_err(|_| anyhow!("failed to install the rustls crypto provider"))?;

    let args = Args::parse();

    let composer = MessageComposer::new(
        Arc::new(PatternAddressValidator::new()),
        Arc::new(LocalFileStore::new()),
    );
    let mailer = Arc::new(SMTPMailer::new(args.smtp)?);

    let state = AppState::new(MessageServiceImpl::new(composer, mailer));

    let http_port = args.server.http_port;
    let https_port = args.server.https_port;

    let (http, https) = tokio::join!(
        tokio::spawn(
            HttpServer::new(
                SocketAddr::new(Ipv4Addr::UNSPECIFIED.into(), http_port),
                &args.server.base_url,
            )
            .await?
            .run()
        ),
        tokio::spawn(
            HttpsServer::new(
                SocketAddr::new(Ipv4Addr::UNSPECIFIED.into(), https_port),
                &args.server.cert_path,
                &args.server.key_path,
                state,
            )
            .await?
            .run()
        ),
    );

    for result in [http, https] {
        if let Err(e) = result? {
            error!("server exited with an error: {e:#}");
        }
    }

    Ok(())
}
