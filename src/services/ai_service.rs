use crate::error::Result;
use reqwest::Client;
use serde_json::Value as JsonValue;
use std::time::Duration;

const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

const SYSTEM_PROMPT: &str = "Sei un assistente legale professionale. \
Rispondi in modo conciso, chiaro e professionale, in italiano.";

/// Returned with a success status whenever the upstream call fails, so the
/// front-end can always render an answer.
pub const FALLBACK_REPLY: &str = "Servizio AI temporaneamente non disponibile";

#[derive(Clone)]
pub struct AiService {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl AiService {
    pub fn new(api_key: String, client: Client) -> Self {
        Self::with_endpoint(api_key, client, DEFAULT_ENDPOINT.to_string())
    }

    pub fn with_endpoint(api_key: String, client: Client, endpoint: String) -> Self {
        Self {
            client,
            api_key,
            endpoint,
        }
    }

    /// Forward the user's message under the fixed assistant preamble. Any
    /// upstream failure degrades to [`FALLBACK_REPLY`] rather than an error.
    pub async fn chat(&self, messaggio: &str) -> String {
        match self.chat_completion(messaggio).await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!("AI chat failed: {:?}", e);
                FALLBACK_REPLY.to_string()
            }
        }
    }

    async fn chat_completion(&self, messaggio: &str) -> Result<String> {
        let payload = serde_json::json!({
            "model": "gpt-4o-mini",
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": messaggio}
            ],
            "temperature": 0.7
        });

        let res = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .timeout(Duration::from_secs(60))
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("OpenAI API Error {}: {}", status, text).into());
        }

        let body: JsonValue = res.json().await?;

        body.get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .map(|s| s.trim().to_string())
            .ok_or_else(|| anyhow::anyhow!("Invalid OpenAI response format").into())
    }
}
