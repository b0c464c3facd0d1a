//! Gemini `generateContent` payload envelope.

use crate::models::Content;
use serde::{Deserialize, Serialize};

/// Outbound request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub system_instruction: Content,
    pub generation_config: GenerationConfig,
}

/// Generation parameters; fixed by the proxy, never caller-controlled.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f64,
    pub max_output_tokens: u32,
}

/// Top-level `generateContent` response envelope.
///
/// Deserializing through these structs is the format check: a 2xx body that
/// does not match decodes to an error instead of panicking on field access.
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    pub candidates: Vec<Candidate>,
}

/// Candidate completion item returned by Gemini.
#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Content,
}
