//! Message composition and sending

mod composer;
mod errors;
mod message;
mod request;
mod service;

pub use composer::MessageComposer;
pub use errors::{ComposeError, SendMessageError};
pub use message::{AttachmentBinding, ComposedMessage, MessageBody};
pub use request::MessageRequest;
pub use service::{MessageService, MessageServiceImpl};

#[cfg(test)]
pub mod tests {
    pub use super::service::MockMessageService;
}
