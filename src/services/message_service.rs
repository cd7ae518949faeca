use crate::error::Result;
use crate::models::message::{CreateMessage, NewMessage};
use crate::store::client::StoreClient;
use crate::utils::time;
use serde_json::Value;
use std::collections::HashSet;

#[derive(Clone)]
pub struct MessageService {
    store: StoreClient,
}

impl MessageService {
    pub fn new(store: StoreClient) -> Self {
        Self { store }
    }

    pub async fn send(&self, payload: CreateMessage) -> Result<Vec<Value>> {
        let row = NewMessage {
            mittente: payload.mittente,
            destinatario: payload.destinatario,
            testo: payload.testo,
            timestamp: time::clock(),
            file_data: payload.file_data,
            file_name: payload.file_name,
        };
        self.store.insert("messaggi", &row).await
    }

    /// Undirected thread between two users: messages in either direction,
    /// oldest first. Symmetric in its arguments.
    pub async fn conversation(&self, u1: &str, u2: &str) -> Result<Vec<Value>> {
        let expr = format!(
            "(and(mittente.eq.{u1},destinatario.eq.{u2}),and(mittente.eq.{u2},destinatario.eq.{u1}))"
        );
        self.store
            .from("messaggi")
            .or(expr)
            .order("created_at", false)
            .fetch()
            .await
    }

    /// Every distinct peer the user has exchanged messages with. The user
    /// never appears in their own list.
    pub async fn partners(&self, utente: &str) -> Result<Vec<String>> {
        let rows = self
            .store
            .from("messaggi")
            .columns("mittente,destinatario")
            .or(format!("(mittente.eq.{utente},destinatario.eq.{utente})"))
            .fetch()
            .await?;

        let mut peers = HashSet::new();
        for row in &rows {
            for field in ["mittente", "destinatario"] {
                if let Some(name) = row.get(field).and_then(|v| v.as_str()) {
                    if name != utente {
                        peers.insert(name.to_string());
                    }
                }
            }
        }

        Ok(peers.into_iter().collect())
    }
}
