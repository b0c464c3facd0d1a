//! Chat backend integration.
//!
//! The server talks to its backend through the `ChatService` trait so the
//! HTTP surface can be exercised against a scripted mock while production
//! wires in the Gemini client.

pub mod gemini;
pub mod mock;

pub use gemini::GeminiChatClient;
pub use mock::MockChatClient;

use crate::models::Content;
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ChatService: Send + Sync {
    /// Sends the conversation upstream and returns the reply text.
    async fn generate_reply(&self, contents: Vec<Content>) -> Result<String>;
}
