use crate::{Error, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Lightweight Gemini REST transport used by the chat client.
pub struct GeminiHttpClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiHttpClient {
    /// Construct a Gemini transport.
    ///
    /// `model` should be the bare model ID (for example
    /// `gemini-2.0-flash-exp`); a `models/...` prefix is stripped.
    pub fn new(api_key: String, model: String, base_url: String) -> Self {
        Self::new_with_client(api_key, model, base_url, Client::new())
    }

    pub fn new_with_client(
        api_key: String,
        model: String,
        base_url: String,
        client: Client,
    ) -> Self {
        let model = model.strip_prefix("models/").unwrap_or(&model).to_string();

        Self {
            client,
            api_key,
            model,
            base_url,
        }
    }

    /// Returns the configured model ID without the `models/` prefix.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Calls Gemini's `generateContent` endpoint. The credential travels as
    /// the `key` query parameter.
    pub async fn generate_content<Req: Serialize, Resp: DeserializeOwned>(
        &self,
        request: &Req,
    ) -> Result<Resp> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request to Gemini: {}", e);
                e
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await?;
            tracing::error!("Gemini API error (status {}): {}", status, body);
            return Err(Error::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Unexpected Gemini response shape: {}\nBody: {}", e, body);
            Error::Format(format!("failed to decode Gemini response: {}", e))
        })
    }
}
