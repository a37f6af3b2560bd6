use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// GET /live - liveness probe (is the process alive?)
pub async fn liveness() -> Response {
    (StatusCode::OK, "OK").into_response()
}
