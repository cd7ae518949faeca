use crate::{error::Result, models::message::CreateMessage, utils::validation::validate, AppState};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

pub async fn list_conversations(
    State(state): State<AppState>,
    Path(utente): Path<String>,
) -> Result<impl IntoResponse> {
    let peers = state.message_service.partners(&utente).await?;
    Ok(Json(peers))
}

pub async fn read_conversation(
    State(state): State<AppState>,
    Path((u1, u2)): Path<(String, String)>,
) -> Result<impl IntoResponse> {
    let messages = state.message_service.conversation(&u1, &u2).await?;
    Ok(Json(messages))
}

pub async fn send_message(
    State(state): State<AppState>,
    Json(payload): Json<CreateMessage>,
) -> Result<impl IntoResponse> {
    validate(&payload)?;
    let rows = state.message_service.send(payload).await?;
    Ok(Json(rows))
}
