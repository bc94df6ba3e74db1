//! OpenAPI module

use utoipa::OpenApi;

use crate::infrastructure::http::{errors::ErrorResponse, handlers::v1::*};

/// The OpenAPI document for the v1 API
#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "Mail Sender"),
    paths(send_message::handler),
    components(schemas(
        send_message::SendMessageBody,
        send_message::SendMessageResponse,
        ErrorResponse,
    ))
)]
pub struct ApiDocs;
