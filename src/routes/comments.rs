use crate::{error::Result, models::comment::CreateComment, utils::validation::validate, AppState};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

pub async fn list_comments(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
) -> Result<impl IntoResponse> {
    let comments = state.comment_service.list_for_post(post_id).await?;
    Ok(Json(comments))
}

pub async fn create_comment(
    State(state): State<AppState>,
    Json(payload): Json<CreateComment>,
) -> Result<impl IntoResponse> {
    validate(&payload)?;
    let rows = state.comment_service.create(payload).await?;
    Ok(Json(rows))
}
