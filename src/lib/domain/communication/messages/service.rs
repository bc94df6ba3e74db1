//! Message service

use std::sync::Arc;

use async_trait::async_trait;

#[cfg(test)]
use mockall::mock;

use crate::domain::communication::{
    email_addresses::AddressValidator, files::FileStore, mailer::Mailer,
};

use super::{MessageComposer, MessageRequest, SendMessageError};

/// Message service
#[async_trait]
pub trait MessageService: Clone + Send + Sync + 'static {
    /// Validates, composes and sends a message.
    ///
    /// # Arguments
    /// * `request` - The [`MessageRequest`] describing the message.
    ///
    /// # Returns
    /// A [`Result`] which is [`Ok`] once the mailer accepted the message,
    /// or an [`Err`] containing the single [`SendMessageError`] that stopped it.
    async fn send_message(&self, request: &MessageRequest) -> Result<(), SendMessageError>;
}

#[cfg(test)]
mock! {
    pub MessageService {}

    impl Clone for MessageService {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl MessageService for MessageService {
        async fn send_message(&self, request: &MessageRequest) -> Result<(), SendMessageError>;
    }
}

/// Message service implementation
#[derive(Debug)]
pub struct MessageServiceImpl<V, F, M>
where
    V: AddressValidator,
    F: FileStore,
    M: Mailer,
{
    composer: MessageComposer<V, F>,
    mailer: Arc<M>,
}

impl<V, F, M> Clone for MessageServiceImpl<V, F, M>
where
    V: AddressValidator,
    F: FileStore,
    M: Mailer,
{
    fn clone(&self) -> Self {
        Self {
            composer: self.composer.clone(),
            mailer: Arc::clone(&self.mailer),
        }
    }
}

impl<V, F, M> MessageServiceImpl<V, F, M>
where
    V: AddressValidator,
    F: FileStore,
    M: Mailer,
{
    /// Creates a new message service.
    pub fn new(composer: MessageComposer<V, F>, mailer: Arc<M>) -> Self {
        Self { composer, mailer }
    }
}

#[async_trait]
impl<V, F, M> MessageService for MessageServiceImpl<V, F, M>
where
    V: AddressValidator,
    F: FileStore,
    M: Mailer,
{
    async fn send_message(&self, request: &MessageRequest) -> Result<(), SendMessageError> {
        let message = self.composer.compose(request)?;

        self.mailer.send(message).await?;

        Ok(())
    }
}
