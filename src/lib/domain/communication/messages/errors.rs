//! Error types for message composition and sending

use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use crate::domain::communication::mailer::MailerError;

/// Reasons a [`MessageRequest`](super::MessageRequest) is rejected
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComposeError {
    /// Recipient missing or not an email address
    #[error("wrong recipient")]
    InvalidRecipient,

    /// Subject missing or empty
    #[error("wrong subject")]
    InvalidSubject,

    /// Body missing
    #[error("wrong body")]
    InvalidBody,

    /// Content type flag not set
    #[error("wrong content type flag")]
    InvalidContentTypeFlag,

    /// Attachment file missing or unreadable
    #[error("attachment \"{}\" not found", .0.display())]
    AttachmentNotFound(PathBuf),

    /// Attachment display name missing or empty
    #[error("attachment \"{}\" has no name", .0.display())]
    InvalidAttachmentName(PathBuf),
}

/// Errors that can occur when sending a message
#[derive(Debug, Error)]
pub enum SendMessageError {
    /// The request failed validation or composition
    #[error(transparent)]
    Invalid(#[from] ComposeError),

    /// The transport refused or failed the delivery
    #[error("could not send message: {0}")]
    TransportFailure(anyhow::Error),

    /// The composed message could not be turned into MIME
    #[error("could not build message: {0}")]
    MessagingFailure(anyhow::Error),
}

impl From<MailerError> for SendMessageError {
    fn from(err: MailerError) -> Self {
        debug!("MailerError -> SendMessageError");

        match err {
            MailerError::SendError(e) => SendMessageError::TransportFailure(e),
            MailerError::InvalidEmail => {
                SendMessageError::MessagingFailure(MailerError::InvalidEmail.into())
            }
            MailerError::UnknownError(e) => SendMessageError::MessagingFailure(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;

    use super::*;

    #[test]
    fn test_send_error_is_transport_failure() {
        let err = SendMessageError::from(MailerError::SendError(anyhow!("535 bad credentials")));

        assert!(matches!(err, SendMessageError::TransportFailure(_)));
        assert_eq!(err.to_string(), "could not send message: 535 bad credentials");
    }

    #[test]
    fn test_invalid_email_is_messaging_failure() {
        let err = SendMessageError::from(MailerError::InvalidEmail);

        assert!(matches!(err, SendMessageError::MessagingFailure(_)));
        assert_eq!(err.to_string(), "could not build message: Invalid email address");
    }

    #[test]
    fn test_attachment_errors_name_the_path() {
        let err = ComposeError::AttachmentNotFound(PathBuf::from("/no/such/file"));

        assert_eq!(err.to_string(), "attachment \"/no/such/file\" not found");
    }
}
