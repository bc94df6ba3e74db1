//! Send message handler

use std::{collections::BTreeMap, path::PathBuf};

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    domain::communication::messages::{MessageRequest, MessageService},
    infrastructure::http::{errors::ApiError, state::AppState},
};

/// Send message request body
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageBody {
    /// The recipient's email address
    #[schema(example = "email@example.com")]
    recipient: Option<String>,

    /// The subject line
    #[schema(example = "Monthly report")]
    subject: Option<String>,

    /// The message content
    #[serde(alias = "textContent")]
    #[schema(example = "Please find the report attached.")]
    body: Option<String>,

    /// Whether `body` is HTML
    #[schema(example = false)]
    is_html: Option<bool>,

    /// Attachment file paths mapped to the names the recipient sees
    #[schema(example = json!({ "/srv/reports/2024-06.pdf": "report.pdf" }))]
    attachments: Option<BTreeMap<String, Option<String>>>,
}

impl From<SendMessageBody> for MessageRequest {
    fn from(body: SendMessageBody) -> Self {
        Self {
            recipient: body.recipient,
            subject: body.subject,
            body: body.body,
            is_html: body.is_html,
            attachments: body.attachments.map(|attachments| {
                attachments
                    .into_iter()
                    .map(|(path, name)| (PathBuf::from(path), name))
                    .collect()
            }),
        }
    }
}

/// Send message response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SendMessageResponse {
    success: bool,
}

/// Send an email message
#[utoipa::path(
    post,
    operation_id = "send_message",
    tag = "Messages",
    path = "/api/v1/messages",
    request_body = SendMessageBody,
    responses(
        (status = StatusCode::OK, description = "Message sent", body = SendMessageResponse),
        (status = StatusCode::FORBIDDEN, description = "The mail transport refused the message", body = ErrorResponse),
        (status = StatusCode::GONE, description = "Attachment not found", body = ErrorResponse, example = json!({ "error": "Attachment \"/no/such/file\" not found" })),
        (status = StatusCode::PRECONDITION_FAILED, description = "Invalid message parameters", body = ErrorResponse, example = json!({ "error": "Please provide a subject" })),
        (status = StatusCode::INTERNAL_SERVER_ERROR, description = "The message could not be built", body = ErrorResponse),
    )
)]
pub async fn handler<S: MessageService>(
    State(state): State<AppState<S>>,
    request: Result<Json<SendMessageBody>, JsonRejection>,
) -> Result<Json<SendMessageResponse>, ApiError> {
    let Json(body) = request?;
    let request: MessageRequest = body.into();

    state.messages.send_message(&request).await?;

    Ok(Json(SendMessageResponse { success: true }))
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;
    use testresult::TestResult;

    use crate::{
        domain::communication::messages::{
            tests::MockMessageService, ComposeError, SendMessageError,
        },
        infrastructure::http::{
            errors::ErrorResponse, servers::https::router, state::tests::test_state,
        },
    };

    use super::*;

    #[tokio::test]
    async fn test_send_message_success() -> TestResult {
        let mut messages = MockMessageService::new();

        messages
            .expect_send_message()
            .withf(|request| {
                request.recipient.as_deref() == Some("a@b.com")
                    && request.subject.as_deref() == Some("Hi")
                    && request.body.as_deref() == Some("hello")
                    && request.is_html == Some(false)
                    && request.attachments.is_none()
            })
            .times(1)
            .returning(|_| Ok(()));

        let response = TestServer::new(router(test_state(Some(messages))))?
            .post("/api/v1/messages")
            .json(&json!({
                "recipient": "a@b.com",
                "subject": "Hi",
                "body": "hello",
                "isHtml": false,
            }))
            .await;

        response.assert_status_ok();
        assert!(response.json::<SendMessageResponse>().success);

        Ok(())
    }

    #[tokio::test]
    async fn test_text_content_alias_and_attachments() -> TestResult {
        let mut messages = MockMessageService::new();

        messages
            .expect_send_message()
            .withf(|request| {
                let attachments = request.attachments.as_ref();

                request.body.as_deref() == Some("<p>hello</p>")
                    && request.is_html == Some(true)
                    && attachments.map(|a| a.len()) == Some(2)
                    && attachments
                        .and_then(|a| a.get(&PathBuf::from("/tmp/a.txt")))
                        .is_some_and(|name| name.as_deref() == Some("one.txt"))
                    && attachments
                        .and_then(|a| a.get(&PathBuf::from("/tmp/b.txt")))
                        .is_some_and(|name| name.is_none())
            })
            .times(1)
            .returning(|_| Ok(()));

        let response = TestServer::new(router(test_state(Some(messages))))?
            .post("/api/v1/messages")
            .json(&json!({
                "recipient": "a@b.com",
                "subject": "Hi",
                "textContent": "<p>hello</p>",
                "isHtml": true,
                "attachments": { "/tmp/a.txt": "one.txt", "/tmp/b.txt": null },
            }))
            .await;

        response.assert_status_ok();

        Ok(())
    }

    #[tokio::test]
    async fn test_send_message_validation_error() -> TestResult {
        let mut messages = MockMessageService::new();

        messages
            .expect_send_message()
            .returning(|_| Err(ComposeError::InvalidSubject.into()));

        let response = TestServer::new(router(test_state(Some(messages))))?
            .post("/api/v1/messages")
            .json(&json!({ "recipient": "a@b.com", "subject": "" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::PRECONDITION_FAILED);
        assert_eq!(response.json::<ErrorResponse>().error, "Please provide a subject");

        Ok(())
    }

    #[tokio::test]
    async fn test_send_message_attachment_not_found() -> TestResult {
        let mut messages = MockMessageService::new();

        messages.expect_send_message().returning(|_| {
            Err(ComposeError::AttachmentNotFound(PathBuf::from("/no/such/file")).into())
        });

        let response = TestServer::new(router(test_state(Some(messages))))?
            .post("/api/v1/messages")
            .json(&json!({
                "recipient": "a@b.com",
                "subject": "Hi",
                "body": "hello",
                "isHtml": false,
                "attachments": { "/no/such/file": "x.jpg" },
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::GONE);

        Ok(())
    }

    #[tokio::test]
    async fn test_send_message_transport_failure() -> TestResult {
        let mut messages = MockMessageService::new();

        messages.expect_send_message().returning(|_| {
            Err(SendMessageError::TransportFailure(anyhow!(
                "authentication failed"
            )))
        });

        let response = TestServer::new(router(test_state(Some(messages))))?
            .post("/api/v1/messages")
            .json(&json!({
                "recipient": "a@b.com",
                "subject": "Hi",
                "body": "hello",
                "isHtml": false,
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(response.json::<ErrorResponse>().error, "authentication failed");

        Ok(())
    }

    #[tokio::test]
    async fn test_malformed_body_is_rejected() -> TestResult {
        let mut messages = MockMessageService::new();
        messages.expect_send_message().times(0);

        let response = TestServer::new(router(test_state(Some(messages))))?
            .post("/api/v1/messages")
            .json(&json!({ "isHtml": "yes" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

        Ok(())
    }
}
