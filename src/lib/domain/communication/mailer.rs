//! Email service module

use async_trait::async_trait;

#[cfg(test)]
use mockall::mock;

use crate::domain::communication::messages::ComposedMessage;

mod errors;

pub use errors::MailerError;

/// Delivers composed messages
#[async_trait]
pub trait Mailer: Clone + Send + Sync + 'static {
    /// Send an email
    ///
    /// # Arguments
    /// * `message` - The [`ComposedMessage`] to deliver. The mailer takes
    ///   ownership; nothing else holds on to it.
    ///
    /// # Returns
    /// A [`Result`] indicating success or failure.
    async fn send(&self, message: ComposedMessage) -> Result<(), MailerError>;
}

#[cfg(test)]
mock! {
    pub Mailer {}

    impl Clone for Mailer {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl Mailer for Mailer {
        async fn send(&self, message: ComposedMessage) -> Result<(), MailerError>;
    }
}
