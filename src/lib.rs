pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
pub mod utils;

use crate::services::{
    ai_service::AiService, comment_service::CommentService, message_service::MessageService,
    notification_service::NotificationService, post_service::PostService,
    professional_service::ProfessionalService,
};
use crate::store::client::StoreClient;
use reqwest::Client;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub store: StoreClient,
    pub professional_service: ProfessionalService,
    pub post_service: PostService,
    pub comment_service: CommentService,
    pub message_service: MessageService,
    pub notification_service: NotificationService,
    pub ai_service: AiService,
}

impl AppState {
    /// Build the state from an already-constructed store and AI client, so
    /// tests can point both at substitute endpoints.
    pub fn new(store: StoreClient, ai_service: AiService) -> Self {
        Self {
            professional_service: ProfessionalService::new(store.clone()),
            post_service: PostService::new(store.clone()),
            comment_service: CommentService::new(store.clone()),
            message_service: MessageService::new(store.clone()),
            notification_service: NotificationService::new(store.clone()),
            store,
            ai_service,
        }
    }

    pub fn from_config() -> Self {
        let config = crate::config::get_config();
        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap();

        let store = StoreClient::new(
            config.supabase_url.clone(),
            config.supabase_key.clone(),
            http_client.clone(),
        );
        let ai_service = AiService::new(config.openai_api_key.clone(), http_client);

        Self::new(store, ai_service)
    }
}
