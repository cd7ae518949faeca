use crate::{error::Result, AppState};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

pub async fn list_notifications(
    State(state): State<AppState>,
    Path(utente): Path<String>,
) -> Result<impl IntoResponse> {
    let notifications = state.notification_service.list_for(&utente).await?;
    Ok(Json(notifications))
}
