use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePost {
    #[validate(length(min = 1, message = "autore obbligatorio"))]
    pub autore: String,
    #[validate(length(min = 1, message = "contenuto obbligatorio"))]
    pub contenuto: String,
}

/// Row shape sent to the `posts` table; `data` is the gateway's `DD/MM/YYYY`
/// wall-clock stamp, ordering uses the store's own `created_at`.
#[derive(Debug, Serialize)]
pub struct NewPost {
    pub autore: String,
    pub contenuto: String,
    pub data: String,
}
