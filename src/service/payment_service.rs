use std::sync::Arc;

use chrono::Utc;
use qrcode::render::svg;
use qrcode::QrCode;
use uuid::Uuid;

use crate::{
    config::RentConfig,
    domain::{Payment, PaymentStatus},
    error::Result,
    repository::PaymentRepository,
};

const QR_IMAGE_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/?size=500x500&data=";

/// Creates payments with deterministically derived UPI and QR links and
/// records the outcome the tenant reports.
pub struct PaymentService {
    repo: Arc<dyn PaymentRepository>,
    rent: RentConfig,
}

impl PaymentService {
    pub fn new(repo: Arc<dyn PaymentRepository>, rent: RentConfig) -> Self {
        Self { repo, rent }
    }

    /// Creates a new payment from the configured rent agreement. The caller
    /// supplies nothing; amount, payee and note all come from configuration.
    pub async fn initiate(&self) -> Result<Payment> {
        let upi_url = build_upi_url(
            &self.rent.upi_id,
            &self.rent.payee_name,
            &self.rent.amount_inr,
            &self.rent.note,
        );
        let qr_url = build_qr_url(&upi_url);

        let payment = Payment {
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            status: PaymentStatus::Created,
            amount: self.rent.amount_inr.clone(),
            upi_id: self.rent.upi_id.clone(),
            payee_name: self.rent.payee_name.clone(),
            note: self.rent.note.clone(),
            upi_url,
            qr_url,
        };

        tracing::info!("Initiated payment {}", payment.id);
        self.repo.insert(payment).await
    }

    pub async fn find(&self, id: &str) -> Result<Option<Payment>> {
        self.repo.find_by_id(id).await
    }

    /// Overwrites the status unconditionally. A payment already marked
    /// FAILED flips to SUCCESS here; last write wins in both directions.
    pub async fn mark_success(&self, id: &str) -> Result<Option<Payment>> {
        self.repo.update_status(id, PaymentStatus::Success).await
    }

    pub async fn mark_failed(&self, id: &str) -> Result<Option<Payment>> {
        self.repo.update_status(id, PaymentStatus::Failed).await
    }

    /// Renders the payment's UPI link as an SVG QR code, for clients that
    /// don't want to load the third-party image behind `qr_url`.
    pub async fn qr_svg(&self, id: &str) -> Result<Option<String>> {
        let payment = match self.repo.find_by_id(id).await? {
            Some(payment) => payment,
            None => return Ok(None),
        };

        let code = QrCode::new(payment.upi_url.as_bytes())?;
        let image = code
            .render::<svg::Color>()
            .min_dimensions(500, 500)
            .build();

        Ok(Some(image))
    }
}

// Query parameter values are percent-encoded individually; the URL skeleton
// around them is emitted as-is.
fn build_upi_url(pa: &str, pn: &str, am: &str, tn: &str) -> String {
    format!(
        "upi://pay?pa={}&pn={}&am={}&cu=INR&tn={}",
        enc(pa),
        enc(pn),
        enc(am),
        enc(tn)
    )
}

fn build_qr_url(upi_url: &str) -> String {
    format!("{}{}", QR_IMAGE_ENDPOINT, enc(upi_url))
}

fn enc(v: &str) -> String {
    urlencoding::encode(v).into_owned()
}
