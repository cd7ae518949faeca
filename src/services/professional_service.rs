use crate::error::Result;
use crate::models::professional::CreateProfessional;
use crate::store::client::StoreClient;
use serde_json::Value;

#[derive(Clone)]
pub struct ProfessionalService {
    store: StoreClient,
}

impl ProfessionalService {
    pub fn new(store: StoreClient) -> Self {
        Self { store }
    }

    pub async fn register(&self, payload: CreateProfessional) -> Result<Vec<Value>> {
        self.store.insert("professionisti", &payload).await
    }

    /// Exact-match lookup on email + password. Returns the first matching row
    /// in full, or None when the credentials match nothing.
    pub async fn login(&self, email: &str, password: &str) -> Result<Option<Value>> {
        let rows = self
            .store
            .from("professionisti")
            .eq("email", email)
            .eq("password", password)
            .fetch()
            .await?;

        Ok(rows.into_iter().next())
    }
}
