pub mod ai;
pub mod auth;
pub mod comments;
pub mod health;
pub mod messages;
pub mod news;
pub mod notifications;
pub mod posts;

use crate::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// The full HTTP surface, shared between main and the integration tests.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::home))
        .route("/registrazione", post(auth::register))
        .route("/login", post(auth::login))
        .route("/posts", get(posts::list_posts))
        .route("/posts/crea", post(posts::create_post))
        .route("/posts/:id/commenti", get(comments::list_comments))
        .route("/commenti/crea", post(comments::create_comment))
        .route(
            "/messaggi/conversazioni/:utente",
            get(messages::list_conversations),
        )
        .route("/messaggi/leggi/:u1/:u2", get(messages::read_conversation))
        .route("/messaggi/invia", post(messages::send_message))
        .route("/notifiche/:utente", get(notifications::list_notifications))
        .route("/ai/chat", post(ai::chat))
        .route("/news", get(news::list_news))
        .with_state(state)
}
