use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    domain::{Payment, PaymentStatus},
    error::Result,
    repository::PaymentRepository,
};

/// Payment records live in process memory for the lifetime of the server;
/// nothing is ever evicted. Values are stored as immutable snapshots and a
/// status update replaces the whole record under the write lock, so two
/// concurrent updates to the same id resolve last-write-wins.
pub struct InMemoryPaymentRepository {
    payments: RwLock<HashMap<String, Payment>>,
}

impl InMemoryPaymentRepository {
    pub fn new() -> Self {
        Self {
            payments: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryPaymentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentRepository for InMemoryPaymentRepository {
    async fn insert(&self, payment: Payment) -> Result<Payment> {
        let mut payments = self.payments.write().await;
        payments.insert(payment.id.clone(), payment.clone());
        Ok(payment)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Payment>> {
        let payments = self.payments.read().await;
        Ok(payments.get(id).cloned())
    }

    async fn update_status(&self, id: &str, status: PaymentStatus) -> Result<Option<Payment>> {
        let mut payments = self.payments.write().await;
        match payments.get(id).cloned() {
            Some(mut payment) => {
                payment.status = status;
                payments.insert(id.to_string(), payment.clone());
                Ok(Some(payment))
            }
            None => Ok(None),
        }
    }
}
