use serde::{Deserialize, Serialize};
use validator::Validate;

/// Comment payload for the `commenti` table. `post_id` is taken on trust;
/// the gateway never checks that the post exists.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateComment {
    pub post_id: i64,
    #[validate(length(min = 1, message = "autore obbligatorio"))]
    pub autore: String,
    #[validate(length(min = 1, message = "testo obbligatorio"))]
    pub testo: String,
}
