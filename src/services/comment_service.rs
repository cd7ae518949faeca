use crate::error::Result;
use crate::models::comment::CreateComment;
use crate::store::client::StoreClient;
use serde_json::Value;

#[derive(Clone)]
pub struct CommentService {
    store: StoreClient,
}

impl CommentService {
    pub fn new(store: StoreClient) -> Self {
        Self { store }
    }

    pub async fn list_for_post(&self, post_id: i64) -> Result<Vec<Value>> {
        self.store
            .from("commenti")
            .eq("post_id", &post_id.to_string())
            .order("created_at", false)
            .fetch()
            .await
    }

    pub async fn create(&self, payload: CreateComment) -> Result<Vec<Value>> {
        self.store.insert("commenti", &payload).await
    }
}
