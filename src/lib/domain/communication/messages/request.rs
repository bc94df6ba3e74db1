//! Incoming message parameters

use std::{collections::BTreeMap, path::PathBuf};

/// Parameters for a single outgoing message.
///
/// Every field is optional because "missing" is a validation outcome, not a
/// parse failure. `attachments` maps a file path to the name the recipient
/// sees; iteration follows path order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageRequest {
    /// The recipient's email address
    pub recipient: Option<String>,

    /// The subject line
    pub subject: Option<String>,

    /// The message content
    pub body: Option<String>,

    /// Whether `body` is HTML rather than plain text
    pub is_html: Option<bool>,

    /// Attachment file paths and their display names
    pub attachments: Option<BTreeMap<PathBuf, Option<String>>>,
}

impl MessageRequest {
    /// Whether at least one attachment was requested
    pub fn has_attachments(&self) -> bool {
        self.attachments
            .as_ref()
            .is_some_and(|attachments| !attachments.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_attachments() {
        let request = MessageRequest::default();

        assert!(!request.has_attachments());
    }

    #[test]
    fn test_empty_attachments_count_as_absent() {
        let request = MessageRequest {
            attachments: Some(BTreeMap::new()),
            ..Default::default()
        };

        assert!(!request.has_attachments());
    }

    #[test]
    fn test_attachment_without_name_still_counts() {
        let request = MessageRequest {
            attachments: Some(BTreeMap::from([(PathBuf::from("/tmp/a.txt"), None)])),
            ..Default::default()
        };

        assert!(request.has_attachments());
    }
}
