use crate::error::Result;
use crate::store::client::StoreClient;
use serde_json::Value;

/// Read-only view over the `notifiche` table; the write path lives outside
/// this gateway. Rows are relayed untyped since their shape is free-form
/// beyond the recipient column.
#[derive(Clone)]
pub struct NotificationService {
    store: StoreClient,
}

impl NotificationService {
    pub fn new(store: StoreClient) -> Self {
        Self { store }
    }

    pub async fn list_for(&self, utente: &str) -> Result<Vec<Value>> {
        self.store
            .from("notifiche")
            .eq("destinatario", utente)
            .order("created_at", true)
            .fetch()
            .await
    }
}
