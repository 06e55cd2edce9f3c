use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

pub async fn root() -> impl IntoResponse {
    Json(json!({
        "name": "Rent Portal API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "UPI rent payment links and tenant message board",
        "status": "operational",
        "endpoints": {
            "health": "/health",
            "config": "/api/config",
            "payments": "/api/payments",
            "messages": "/api/messages"
        }
    }))
}

pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    })))
}
