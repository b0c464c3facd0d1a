use super::ChatService;
use crate::models::Content;
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Scripted chat backend for tests.
pub struct MockChatClient {
    replies: Arc<Mutex<Vec<String>>>,
    errors: Arc<Mutex<Vec<Error>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockChatClient {
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(Vec::new())),
            errors: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_reply(self, reply: String) -> Self {
        self.replies.lock().unwrap().push(reply);
        self
    }

    /// Queues an error returned before any scripted replies.
    pub fn with_error(self, error: Error) -> Self {
        self.errors.lock().unwrap().push(error);
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatService for MockChatClient {
    async fn generate_reply(&self, contents: Vec<Content>) -> Result<String> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        let mut errors = self.errors.lock().unwrap();
        if !errors.is_empty() {
            return Err(errors.remove(0));
        }

        let replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            // Default mock reply echoes the newest turn
            let last = contents
                .last()
                .and_then(|c| c.parts.first())
                .map(|p| p.text.clone())
                .unwrap_or_default();
            Ok(format!("Chomp Chomp heard: {}", last))
        } else {
            let index = (*count - 1) % replies.len();
            Ok(replies[index].clone())
        }
    }
}
