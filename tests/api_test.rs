use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::util::ServiceExt;

use rent_portal::{
    config::{RentConfig, ServerConfig, Settings},
    repository::{InMemoryMessageRepository, InMemoryPaymentRepository},
    service::ServiceContext,
};

fn test_app() -> Router {
    let settings = Settings {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        rent: RentConfig {
            upi_id: "owner@bank".to_string(),
            payee_name: "Owner".to_string(),
            amount_inr: "15000".to_string(),
            note: "Rent".to_string(),
            owner_name: "Asha".to_string(),
        },
    };

    let payment_repo = Arc::new(InMemoryPaymentRepository::new());
    let message_repo = Arc::new(InMemoryMessageRepository::new());
    let service_context = Arc::new(ServiceContext::new(payment_repo, message_repo, &settings));

    rent_portal::api::create_app(service_context, Arc::new(settings))
}

async fn body_json(response: axum::response::Response) -> anyhow::Result<Value> {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[tokio::test]
async fn test_config_endpoint_exposes_rent_details() -> anyhow::Result<()> {
    let app = test_app();

    let response = app
        .oneshot(Request::builder().uri("/api/config").body(Body::empty())?)
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await?;
    assert_eq!(json["ownerName"], "Asha");
    assert_eq!(json["payeeName"], "Owner");
    assert_eq!(json["upiId"], "owner@bank");
    assert_eq!(json["amountINR"], "15000");
    assert_eq!(json["note"], "Rent");

    Ok(())
}

#[tokio::test]
async fn test_payment_lifecycle_over_http() -> anyhow::Result<()> {
    let app = test_app();

    // Initiate
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/payments")
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let payment = body_json(response).await?;
    assert_eq!(payment["status"], "CREATED");
    assert_eq!(
        payment["upiUrl"],
        "upi://pay?pa=owner%40bank&pn=Owner&am=15000&cu=INR&tn=Rent"
    );
    let qr_url = payment["qrUrl"].as_str().unwrap();
    assert!(qr_url.starts_with("https://api.qrserver.com/v1/create-qr-code/?size=500x500&data="));
    assert!(qr_url.contains("upi%3A%2F%2Fpay%3Fpa%3Downer%2540bank"));
    assert!(payment["createdAt"].is_string());
    let id = payment["id"].as_str().unwrap().to_string();

    // Fetch
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/api/payments/{}", id))
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await?;
    assert_eq!(fetched["id"], id.as_str());

    // Report success
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/api/payments/{}/success", id))
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await?;
    assert_eq!(updated["status"], "SUCCESS");

    // Report failed afterwards; the overwrite is unguarded
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/api/payments/{}/failed", id))
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await?;
    assert_eq!(updated["status"], "FAILED");

    Ok(())
}

#[tokio::test]
async fn test_unknown_payment_id_is_404_with_empty_body() -> anyhow::Result<()> {
    let app = test_app();

    for (method, uri) in [
        ("GET", "/api/payments/nope"),
        ("POST", "/api/payments/nope/success"),
        ("POST", "/api/payments/nope/failed"),
        ("GET", "/api/payments/nope/qr.svg"),
    ] {
        let response = app
            .clone()
            .oneshot(Request::builder().method(method).uri(uri).body(Body::empty())?)
            .await?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{} {}", method, uri);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        assert!(bytes.is_empty(), "{} {} body not empty", method, uri);
    }

    Ok(())
}

#[tokio::test]
async fn test_qr_svg_endpoint_serves_svg() -> anyhow::Result<()> {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/payments")
                .body(Body::empty())?,
        )
        .await?;
    let payment = body_json(response).await?;
    let id = payment["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/api/payments/{}/qr.svg", id))
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "image/svg+xml"
    );

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let body = String::from_utf8(bytes.to_vec())?;
    assert!(body.contains("<svg"));

    Ok(())
}

#[tokio::test]
async fn test_message_board_over_http() -> anyhow::Result<()> {
    let app = test_app();

    // A client-supplied timestamp is discarded, never echoed.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/messages")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"sender":"A","content":"hi","timestamp":"not-the-server-clock"}"#,
                ))?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let message = body_json(response).await?;
    assert_eq!(message["sender"], "A");
    assert_eq!(message["content"], "hi");
    let timestamp = message["timestamp"].as_str().unwrap();
    assert!(!timestamp.is_empty());
    assert_ne!(timestamp, "not-the-server-clock");

    // The board lists it in order.
    let response = app
        .clone()
        .oneshot(Request::builder().uri("/api/messages").body(Body::empty())?)
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    let messages = body_json(response).await?;
    assert_eq!(messages.as_array().unwrap().len(), 1);
    assert_eq!(messages[0]["content"], "hi");

    // Delete latest empties it again.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/messages/latest")
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/api/messages").body(Body::empty())?)
        .await?;
    let messages = body_json(response).await?;
    assert!(messages.as_array().unwrap().is_empty());

    // Deleting from the now-empty board is still a 200 no-op.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/messages/latest")
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn test_health_endpoint() -> anyhow::Result<()> {
    let app = test_app();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty())?)
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await?;
    assert_eq!(json["status"], "healthy");

    Ok(())
}
