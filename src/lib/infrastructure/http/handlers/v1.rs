//! Version 1 of the API

use axum::{
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    domain::communication::messages::MessageService,
    infrastructure::http::{open_api::ApiDocs, state::AppState},
};

pub mod send_message;

/// Routes served under `/api/v1`
pub fn router<S: MessageService>() -> Router<AppState<S>> {
    Router::new()
        .route("/openapi.json", get(Json(ApiDocs::openapi())))
        .route("/messages", post(send_message::handler))
}
