use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registration payload for the `professionisti` table. The body is inserted
/// as-is; the store assigns the row key. Password is stored and compared as
/// plaintext, matching the paired front-end.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProfessional {
    #[validate(length(min = 1, message = "nome obbligatorio"))]
    pub nome: String,
    #[validate(length(min = 1, message = "cognome obbligatorio"))]
    pub cognome: String,
    #[validate(email(message = "email non valida"))]
    pub email: String,
    #[validate(length(min = 1, message = "password obbligatoria"))]
    pub password: String,
    #[serde(default)]
    pub titolo_professionale: String,
    #[serde(default)]
    pub descrizione: String,
    #[serde(default)]
    pub immagine_profilo: String,
    #[serde(default)]
    pub immagine_copertina: String,
}
