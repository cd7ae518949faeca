use crate::error::{Error, Result};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

/// Thin query client for the hosted PostgREST-style store. All durable data
/// lives behind this API; the gateway never talks to a database directly.
#[derive(Clone)]
pub struct StoreClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl StoreClient {
    pub fn new(base_url: String, api_key: String, client: Client) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    /// Insert one row and return the store's representation of what it wrote.
    pub async fn insert<T: Serialize>(&self, table: &str, payload: &T) -> Result<Vec<Value>> {
        let res = self
            .client
            .post(self.table_url(table))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=representation")
            .json(payload)
            .send()
            .await?;

        Self::rows(res).await
    }

    /// Start a filtered read against `table`.
    pub fn from(&self, table: &str) -> SelectBuilder {
        SelectBuilder {
            store: self.clone(),
            table: table.to_string(),
            params: vec![("select".to_string(), "*".to_string())],
        }
    }

    async fn rows(res: reqwest::Response) -> Result<Vec<Value>> {
        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            return Err(Error::Store(status, body));
        }
        Ok(res.json().await?)
    }
}

pub struct SelectBuilder {
    store: StoreClient,
    table: String,
    params: Vec<(String, String)>,
}

impl SelectBuilder {
    pub fn columns(mut self, cols: &str) -> Self {
        self.params[0].1 = cols.to_string();
        self
    }

    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.params.push((column.to_string(), format!("eq.{}", value)));
        self
    }

    /// Raw PostgREST `or=` expression, e.g. `(a.eq.1,b.eq.2)`.
    pub fn or(mut self, expr: String) -> Self {
        self.params.push(("or".to_string(), expr));
        self
    }

    pub fn order(mut self, column: &str, descending: bool) -> Self {
        let dir = if descending { "desc" } else { "asc" };
        self.params
            .push(("order".to_string(), format!("{}.{}", column, dir)));
        self
    }

    pub async fn fetch(self) -> Result<Vec<Value>> {
        let res = self
            .store
            .client
            .get(self.store.table_url(&self.table))
            .header("apikey", &self.store.api_key)
            .bearer_auth(&self.store.api_key)
            .query(&self.params)
            .send()
            .await?;

        StoreClient::rows(res).await
    }
}
