use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

#[axum::debug_handler]
pub async fn home() -> impl IntoResponse {
    let body = json!({
        "status": "online",
        "message": "Nexum Backend API is running",
    });
    (StatusCode::OK, Json(body))
}
