//! Message composer

use std::{path::Path, sync::Arc};

use crate::domain::communication::{
    email_addresses::{AddressValidator, EmailAddress},
    files::FileStore,
};

use super::{AttachmentBinding, ComposeError, ComposedMessage, MessageBody, MessageRequest};

/// Envelope fields, filled in as their checks pass
#[derive(Debug, Default)]
struct Envelope {
    to: Option<EmailAddress>,
    subject: Option<String>,
    body: Option<String>,
    is_html: Option<bool>,
}

/// A required-field check and the error reported when it fails
type FieldCheck<V> = (fn(&MessageRequest, &V, &mut Envelope) -> bool, ComposeError);

/// Turns a [`MessageRequest`] into a [`ComposedMessage`].
///
/// Holds no per-request state, so one composer can serve every request.
#[derive(Debug)]
pub struct MessageComposer<V, F>
where
    V: AddressValidator,
    F: FileStore,
{
    validator: Arc<V>,
    files: Arc<F>,
}

impl<V, F> Clone for MessageComposer<V, F>
where
    V: AddressValidator,
    F: FileStore,
{
    fn clone(&self) -> Self {
        Self {
            validator: Arc::clone(&self.validator),
            files: Arc::clone(&self.files),
        }
    }
}

impl<V, F> MessageComposer<V, F>
where
    V: AddressValidator,
    F: FileStore,
{
    /// Create a new message composer
    pub fn new(validator: Arc<V>, files: Arc<F>) -> Self {
        Self { validator, files }
    }

    /// Required fields, checked in this order. The first failure wins.
    fn field_checks() -> [FieldCheck<V>; 4] {
        [
            (
                |req, validator, envelope| {
                    envelope.to = req
                        .recipient
                        .as_deref()
                        .and_then(|recipient| EmailAddress::new(recipient, validator).ok());
                    envelope.to.is_some()
                },
                ComposeError::InvalidRecipient,
            ),
            (
                |req, _, envelope| {
                    envelope.subject = req.subject.clone().filter(|s| !s.is_empty());
                    envelope.subject.is_some()
                },
                ComposeError::InvalidSubject,
            ),
            (
                |req, _, envelope| {
                    envelope.body = req.body.clone();
                    envelope.body.is_some()
                },
                ComposeError::InvalidBody,
            ),
            (
                |req, _, envelope| {
                    envelope.is_html = req.is_html;
                    envelope.is_html.is_some()
                },
                ComposeError::InvalidContentTypeFlag,
            ),
        ]
    }

    /// Validate `request` and build the message it describes.
    ///
    /// Attachment files are read through the [`FileStore`]; nothing is
    /// written and `request` is left untouched.
    pub fn compose(&self, request: &MessageRequest) -> Result<ComposedMessage, ComposeError> {
        let mut envelope = Envelope::default();

        for (check, err) in Self::field_checks() {
            if !check(request, self.validator.as_ref(), &mut envelope) {
                return Err(err);
            }
        }

        let Envelope {
            to,
            subject,
            body,
            is_html,
        } = envelope;

        let mut message = ComposedMessage {
            to: to.ok_or(ComposeError::InvalidRecipient)?,
            subject: subject.ok_or(ComposeError::InvalidSubject)?,
            body: MessageBody::new(
                body.ok_or(ComposeError::InvalidBody)?,
                is_html.ok_or(ComposeError::InvalidContentTypeFlag)?,
            ),
            attachments: Vec::new(),
        };

        if request.has_attachments() {
            message.attachments = request
                .attachments
                .iter()
                .flatten()
                .map(|(path, name)| self.bind_attachment(path, name.as_deref()))
                .collect::<Result<_, _>>()?;
        }

        Ok(message)
    }

    fn bind_attachment(
        &self,
        path: &Path,
        name: Option<&str>,
    ) -> Result<AttachmentBinding, ComposeError> {
        if !self.files.exists(path) {
            return Err(ComposeError::AttachmentNotFound(path.to_path_buf()));
        }

        let name = name
            .filter(|name| !name.is_empty())
            .ok_or_else(|| ComposeError::InvalidAttachmentName(path.to_path_buf()))?;

        // The file can vanish between the two calls
        let content = self
            .files
            .read(path)
            .map_err(|_| ComposeError::AttachmentNotFound(path.to_path_buf()))?;

        Ok(AttachmentBinding {
            name: name.to_string(),
            content,
        })
    }
}
