use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A rent payment tracked from link creation until the tenant reports the
/// outcome. The UPI and QR links are derived once at creation and never
/// recomputed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub status: PaymentStatus,
    pub amount: String,
    pub upi_id: String,
    pub payee_name: String,
    pub note: String,
    pub upi_url: String,
    pub qr_url: String,
}

/// Status is overwritten unconditionally by the success/failed endpoints;
/// there is no transition guard, so SUCCESS and FAILED can replace each
/// other in either direction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Created,
    Success,
    Failed,
}
