use axum::{http::StatusCode, response::IntoResponse};

/// Fallback for unknown routes: an empty 404.
pub async fn not_found() -> impl IntoResponse {
    StatusCode::NOT_FOUND
}
