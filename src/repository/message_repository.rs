use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{domain::Message, error::Result, repository::MessageRepository};

/// The shared chat board. A single coarse lock keeps `list`, `append` and
/// `remove_latest` mutually exclusive with each other.
pub struct InMemoryMessageRepository {
    messages: Mutex<Vec<Message>>,
}

impl InMemoryMessageRepository {
    pub fn new() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryMessageRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn list(&self) -> Result<Vec<Message>> {
        let messages = self.messages.lock().await;
        Ok(messages.clone())
    }

    async fn append(&self, message: Message) -> Result<Message> {
        let mut messages = self.messages.lock().await;
        messages.push(message.clone());
        Ok(message)
    }

    /// Removing from an empty board is a no-op, not an error.
    async fn remove_latest(&self) -> Result<()> {
        let mut messages = self.messages.lock().await;
        messages.pop();
        Ok(())
    }
}
