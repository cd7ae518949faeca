use crate::error::Result;
use crate::models::post::{CreatePost, NewPost};
use crate::store::client::StoreClient;
use crate::utils::time;
use serde_json::Value;

#[derive(Clone)]
pub struct PostService {
    store: StoreClient,
}

impl PostService {
    pub fn new(store: StoreClient) -> Self {
        Self { store }
    }

    /// Full feed, newest first.
    pub async fn list(&self) -> Result<Vec<Value>> {
        self.store
            .from("posts")
            .order("created_at", true)
            .fetch()
            .await
    }

    pub async fn create(&self, payload: CreatePost) -> Result<Vec<Value>> {
        let row = NewPost {
            autore: payload.autore,
            contenuto: payload.contenuto,
            data: time::today(),
        };
        self.store.insert("posts", &row).await
    }
}
