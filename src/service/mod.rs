pub mod message_service;
pub mod payment_service;

use std::sync::Arc;

use crate::config::Settings;
use crate::repository::{MessageRepository, PaymentRepository};
use message_service::MessageService;
use payment_service::PaymentService;

pub struct ServiceContext {
    pub payment_service: Arc<PaymentService>,
    pub message_service: Arc<MessageService>,
}

impl ServiceContext {
    pub fn new(
        payment_repo: Arc<dyn PaymentRepository>,
        message_repo: Arc<dyn MessageRepository>,
        settings: &Settings,
    ) -> Self {
        let payment_service = Arc::new(PaymentService::new(payment_repo, settings.rent.clone()));
        let message_service = Arc::new(MessageService::new(message_repo));

        Self {
            payment_service,
            message_service,
        }
    }
}
