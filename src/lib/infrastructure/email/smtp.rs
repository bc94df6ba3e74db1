//! SMTP email service implementation

use std::{fmt, sync::Arc, time::Duration};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use clap::Parser;
use lettre::{
    message::{header::ContentType, Attachment, MultiPart, SinglePart},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::{debug, info};

use crate::domain::communication::{
    mailer::{Mailer, MailerError},
    messages::{ComposedMessage, MessageBody},
};

/// SMTP configuration
#[derive(Clone, Default, Debug, Parser)]
pub struct SMTPConfig {
    /// The SMTP host
    #[clap(long = "smtp-host", env = "SMTP_HOST")]
    pub host: String,

    /// The SMTP port
    #[clap(long = "smtp-port", env = "SMTP_PORT")]
    pub port: u16,

    /// The SMTP username
    #[clap(long = "smtp-user", env = "SMTP_USER")]
    pub username: String,

    /// The SMTP password
    #[clap(long = "smtp-password", env = "SMTP_PASSWORD")]
    pub password: String,

    /// The sender email address
    #[clap(long = "smtp-sender", env = "SMTP_SENDER")]
    pub sender: String,

    /// Verify the TLS certificate
    #[clap(long = "smtp-verify-tls", env = "SMTP_VERIFY_TLS", default_value = "true")]
    pub verify_tls: bool,

    /// Enable STARTTLS (TLS upgrade on connection)
    #[clap(long = "smtp-starttls", env = "SMTP_STARTTLS", default_value = "true")]
    pub starttls: bool,

    /// Connection timeout in seconds
    #[clap(long = "smtp-timeout", env = "SMTP_TIMEOUT", default_value = "10")]
    pub timeout: u64,
}

/// SMTP mailer
#[derive(Clone)]
pub struct SMTPMailer {
    config: SMTPConfig,
    transport: Arc<AsyncSmtpTransport<Tokio1Executor>>,
}

impl fmt::Debug for SMTPMailer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SMTPMailer")
            .field("config", &self.config)
            .field("transport", &"AsyncSmtpTransport")
            .finish()
    }
}

impl SMTPMailer {
    /// Create a new SMTP mailer, building its transport once.
    ///
    /// Must be called inside a tokio runtime.
    pub fn new(config: SMTPConfig) -> Result<Self> {
        let transport = Arc::new(Self::transport(&config)?);

        Ok(Self { config, transport })
    }

    fn transport(config: &SMTPConfig) -> Result<AsyncSmtpTransport<Tokio1Executor>> {
        let creds = Credentials::new(config.username.clone(), config.password.clone());

        let relay = if config.starttls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?
        };

        Ok(relay
            .credentials(creds)
            .port(config.port)
            .timeout(Some(Duration::from_secs(config.timeout)))
            .tls(Tls::Opportunistic(
                TlsParameters::builder(config.host.to_string())
                    .dangerous_accept_invalid_certs(!config.verify_tls)
                    .build()?,
            ))
            .build())
    }

    /// Turn a composed message into a MIME message sent from the configured sender
    pub fn build_message(&self, message: ComposedMessage) -> Result<Message, MailerError> {
        let builder = Message::builder()
            .from(self.config.sender.parse()?)
            .to(message.to.as_str().parse()?)
            .subject(message.subject);

        let body = match message.body {
            MessageBody::Plain(text) => SinglePart::plain(text),
            MessageBody::Html(html) => SinglePart::html(html),
        };

        if message.attachments.is_empty() {
            return Ok(builder.singlepart(body)?);
        }

        debug!("attaching {} file(s)", message.attachments.len());

        let content_type = ContentType::parse("application/octet-stream")
            .map_err(|e| anyhow!("invalid attachment content type: {e}"))?;

        let multipart = message.attachments.into_iter().fold(
            MultiPart::mixed().singlepart(body),
            |multipart, attachment| {
                let part = Attachment::new(attachment.name)
                    .body(attachment.content, content_type.clone());

                multipart.singlepart(part)
            },
        );

        Ok(builder.multipart(multipart)?)
    }
}

#[async_trait]
impl Mailer for SMTPMailer {
    async fn send(&self, message: ComposedMessage) -> Result<(), MailerError> {
        let to = message.to.clone();
        let email = self.build_message(message)?;

        match self.transport.send(email).await {
            Ok(_) => {
                info!("message to {} handed to {}", to, self.config.host);
                Ok(())
            }
            Err(e) => Err(MailerError::SendError(e.into())),
        }
    }
}
