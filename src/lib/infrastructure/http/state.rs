//! Application state module

use std::{fmt, sync::Arc};

use crate::domain::communication::messages::MessageService;

/// Global application state
#[derive(Clone)]
pub struct AppState<S: MessageService> {
    /// Message service
    pub messages: Arc<S>,
}

impl<S> AppState<S>
where
    S: MessageService,
{
    /// Create a new application state
    pub fn new(messages: S) -> Self {
        Self {
            messages: Arc::new(messages),
        }
    }
}

impl<S> fmt::Debug for AppState<S>
where
    S: MessageService,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("messages", &"MessageService")
            .finish()
    }
}
