use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMessage {
    #[validate(length(min = 1, message = "mittente obbligatorio"))]
    pub mittente: String,
    #[validate(length(min = 1, message = "destinatario obbligatorio"))]
    pub destinatario: String,
    pub testo: String,
    pub file_data: Option<String>,
    pub file_name: Option<String>,
}

/// Row shape sent to the `messaggi` table; `timestamp` is the gateway's
/// `HH:MM` wall-clock stamp, ordering uses the store's own `created_at`.
#[derive(Debug, Serialize)]
pub struct NewMessage {
    pub mittente: String,
    pub destinatario: String,
    pub testo: String,
    pub timestamp: String,
    pub file_data: Option<String>,
    pub file_name: Option<String>,
}
