//! Email message

use crate::domain::communication::email_addresses::EmailAddress;

/// The rendered content of a message
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MessageBody {
    /// `text/plain` content
    Plain(String),

    /// `text/html` content
    Html(String),
}

impl MessageBody {
    /// Render `content` as HTML or plain text
    pub fn new(content: String, is_html: bool) -> Self {
        if is_html {
            Self::Html(content)
        } else {
            Self::Plain(content)
        }
    }
}

/// A file's contents bound to the name the recipient sees
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttachmentBinding {
    /// The display name of the attachment
    pub name: String,

    /// The file contents
    pub content: Vec<u8>,
}

/// A validated message ready for a [`Mailer`](crate::domain::communication::mailer::Mailer)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComposedMessage {
    /// The recipient of the email
    pub to: EmailAddress,

    /// The subject of the email
    pub subject: String,

    /// The body of the email
    pub body: MessageBody,

    /// Attachments, in the order they were bound
    pub attachments: Vec<AttachmentBinding>,
}
