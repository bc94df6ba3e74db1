//! API error-handling module

use std::fmt;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::communication::messages::{ComposeError, SendMessageError};

/// An error response
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// The error message
    #[schema(example = "Internal server error")]
    pub error: String,
}

/// An error raised in the API
#[derive(Debug, Deserialize, ToSchema)]
pub struct ApiError {
    /// The status code
    #[schema(example = 500, value_type = u16)]
    #[serde(with = "http_serde::status_code")]
    pub status: StatusCode,

    /// The error message
    #[schema(example = "Internal server error")]
    pub message: String,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: &str) -> Self {
        Self {
            status,
            message: message.to_string(),
        }
    }

    /// Create a new forbidden error
    pub fn new_403(message: &str) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    /// Create a new gone error
    pub fn new_410(message: &str) -> Self {
        Self::new(StatusCode::GONE, message)
    }

    /// Create a new precondition failed error
    pub fn new_412(message: &str) -> Self {
        Self::new(StatusCode::PRECONDITION_FAILED, message)
    }

    /// Create new internal server error
    pub fn new_500(message: &str) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<ComposeError> for ApiError {
    fn from(err: ComposeError) -> Self {
        debug!("ComposeError -> ApiError");

        match err {
            ComposeError::InvalidRecipient => {
                ApiError::new_412("Please provide a valid recipient email address")
            }
            ComposeError::InvalidSubject => ApiError::new_412("Please provide a subject"),
            ComposeError::InvalidBody => ApiError::new_412("Please provide a message body"),
            ComposeError::InvalidContentTypeFlag => {
                ApiError::new_412("Please specify whether the body is HTML")
            }
            ComposeError::InvalidAttachmentName(path) => ApiError::new_412(&format!(
                "Please provide a name for attachment \"{}\"",
                path.display()
            )),
            ComposeError::AttachmentNotFound(path) => {
                ApiError::new_410(&format!("Attachment \"{}\" not found", path.display()))
            }
        }
    }
}

impl From<SendMessageError> for ApiError {
    fn from(err: SendMessageError) -> Self {
        debug!("SendMessageError -> ApiError");

        match err {
            SendMessageError::Invalid(err) => err.into(),
            SendMessageError::TransportFailure(err) => ApiError::new_403(&err.to_string()),
            SendMessageError::MessagingFailure(err) => ApiError::new_500(&err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::new(rejection.status(), &rejection.body_text())
    }
}
