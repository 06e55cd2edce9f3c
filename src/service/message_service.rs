use std::sync::Arc;

use chrono::Utc;

use crate::{domain::Message, error::Result, repository::MessageRepository};

pub struct MessageService {
    repo: Arc<dyn MessageRepository>,
}

impl MessageService {
    pub fn new(repo: Arc<dyn MessageRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<Message>> {
        self.repo.list().await
    }

    /// Stamps the server clock onto the message before it is stored. A
    /// timestamp sent by the client is never used.
    pub async fn post(&self, sender: String, content: String) -> Result<Message> {
        let message = Message {
            sender,
            content,
            timestamp: Utc::now().to_rfc3339(),
        };

        self.repo.append(message).await
    }

    pub async fn delete_latest(&self) -> Result<()> {
        self.repo.remove_latest().await
    }
}
