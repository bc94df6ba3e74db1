//! Composing and sending email messages

pub mod email_addresses;
pub mod files;
pub mod mailer;
pub mod messages;
