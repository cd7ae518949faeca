use crate::{
    error::{Error, Result},
    models::professional::CreateProfessional,
    utils::validation::validate,
    AppState,
};
use axum::{extract::State, response::IntoResponse, Json};
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "email non valida"))]
    pub email: String,
    #[validate(length(min = 1, message = "password obbligatoria"))]
    pub password: String,
}

pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<CreateProfessional>,
) -> Result<impl IntoResponse> {
    validate(&payload)?;
    let rows = state.professional_service.register(payload).await?;
    Ok(Json(rows))
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse> {
    validate(&payload)?;
    match state
        .professional_service
        .login(&payload.email, &payload.password)
        .await?
    {
        Some(row) => Ok(Json(row)),
        None => Err(Error::Unauthorized("Email o password errati".to_string())),
    }
}
