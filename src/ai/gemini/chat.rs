use super::client::GeminiHttpClient;
use super::types::{GenerateContentRequest, GenerateContentResponse, GenerationConfig};
use crate::ai::ChatService;
use crate::models::{Content, Part};
use crate::{prompts, Error, Result};
use async_trait::async_trait;

/// Sampling temperature sent with every request.
pub const TEMPERATURE: f64 = 1.7;
/// Reply length cap sent with every request.
pub const MAX_OUTPUT_TOKENS: u32 = 2048;

pub struct GeminiChatClient {
    http: GeminiHttpClient,
}

impl GeminiChatClient {
    pub fn new(api_key: String, model: String, base_url: String) -> Self {
        Self::new_with_client(api_key, model, base_url, reqwest::Client::new())
    }

    pub fn new_with_client(
        api_key: String,
        model: String,
        base_url: String,
        client: reqwest::Client,
    ) -> Self {
        Self {
            http: GeminiHttpClient::new_with_client(api_key, model, base_url, client),
        }
    }

    fn extract_text(response: &GenerateContentResponse) -> Option<String> {
        response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
    }
}

#[async_trait]
impl ChatService for GeminiChatClient {
    async fn generate_reply(&self, contents: Vec<Content>) -> Result<String> {
        let request = GenerateContentRequest {
            contents,
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: prompts::CHAT_SYSTEM.to_string(),
                }],
            },
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let response: GenerateContentResponse = self.http.generate_content(&request).await?;

        Self::extract_text(&response)
            .ok_or_else(|| Error::Format("no text in first Gemini candidate".to_string()))
    }
}
