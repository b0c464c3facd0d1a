//! Wire types for the chat endpoint.
//!
//! `Content` and `Part` are shared between the inbound API and the Gemini
//! payload; the caller speaks the same turn format the provider does, so a
//! supplied history passes through without translation.

use serde::{Deserialize, Serialize};

/// Inbound chat request.
///
/// A supplied `conversationHistory` is the complete conversation, newest user
/// turn included, and is forwarded upstream unmodified; `message` is not
/// appended to it. Without a history, `message` becomes a single-turn
/// conversation on its own.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: Option<String>,
    pub conversation_history: Option<Vec<Content>>,
}

/// Outbound success body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Outbound failure body. Optional fields are omitted when absent.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
            message: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Conversation turn tagged with an optional role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

/// Text fragment within a turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

impl Content {
    /// Single user turn wrapping `text`.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part { text: text.into() }],
        }
    }
}
