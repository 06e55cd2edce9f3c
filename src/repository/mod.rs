use async_trait::async_trait;

use crate::domain::{Message, Payment, PaymentStatus};
use crate::error::Result;

pub mod message_repository;
pub mod payment_repository;

pub use message_repository::InMemoryMessageRepository;
pub use payment_repository::InMemoryPaymentRepository;

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    async fn insert(&self, payment: Payment) -> Result<Payment>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Payment>>;
    async fn update_status(&self, id: &str, status: PaymentStatus) -> Result<Option<Payment>>;
}

#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Message>>;
    async fn append(&self, message: Message) -> Result<Message>;
    async fn remove_latest(&self) -> Result<()>;
}
