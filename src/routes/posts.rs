use crate::{error::Result, models::post::CreatePost, utils::validation::validate, AppState};
use axum::{extract::State, response::IntoResponse, Json};

pub async fn list_posts(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let posts = state.post_service.list().await?;
    Ok(Json(posts))
}

pub async fn create_post(
    State(state): State<AppState>,
    Json(payload): Json<CreatePost>,
) -> Result<impl IntoResponse> {
    validate(&payload)?;
    let rows = state.post_service.create(payload).await?;
    Ok(Json(rows))
}
