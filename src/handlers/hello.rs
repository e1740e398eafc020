// Hello handler
// Catch-all handler answering every request with the fixed greeting

use axum::{
    http::{header, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use tracing::info;
use uuid::Uuid;

use crate::models::Greeting;

/// Answer any request
/// ANY /*
/// Always 200 with `{"message": "hello world"}`; method, path and body are ignored.
pub async fn hello(method: Method, uri: Uri) -> Response {
    let request_id = Uuid::new_v4();
    info!(%request_id, %method, path = uri.path(), "Request received...");

    // Headers are part of the response value, so they are fixed before any byte is written
    let response = (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Greeting::BODY,
    )
        .into_response();

    // The response is complete here; hyper flushes it to the socket once the handler returns
    info!(%request_id, status = response.status().as_u16(), "Response sent...");
    response
}
