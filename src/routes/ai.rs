use crate::{error::Result, utils::validation::validate, AppState};
use axum::{extract::State, response::IntoResponse, Json};
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct AiChatRequest {
    #[validate(length(min = 1, message = "messaggio obbligatorio"))]
    pub messaggio: String,
}

/// Always answers with a success status; upstream failures come back as the
/// service's fixed fallback text.
pub async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<AiChatRequest>,
) -> Result<impl IntoResponse> {
    validate(&payload)?;
    let risposta = state.ai_service.chat(&payload.messaggio).await;
    Ok(Json(json!({ "risposta": risposta })))
}
