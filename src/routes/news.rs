use axum::{response::IntoResponse, Json};
use serde_json::json;

/// Static placeholder feed; no store call behind it.
pub async fn list_news() -> impl IntoResponse {
    let news = json!([
        {
            "id": 1,
            "titolo": "Benvenuto su Nexum",
            "contenuto": "La piattaforma per i professionisti legali è online.",
            "data": "01/01/2025"
        }
    ]);
    Json(news)
}
