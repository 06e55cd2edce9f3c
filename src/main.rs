use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rent_portal::{
    api,
    config::Settings,
    repository::{InMemoryMessageRepository, InMemoryPaymentRepository},
    service::ServiceContext,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rent_portal=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration; a missing rent section aborts startup.
    let settings = Settings::new()?;

    tracing::info!(
        "Starting rent portal on {}:{}",
        settings.server.host,
        settings.server.port
    );

    // The two in-memory stores are the only shared mutable state; both live
    // for the whole process.
    let payment_repo = Arc::new(InMemoryPaymentRepository::new());
    let message_repo = Arc::new(InMemoryMessageRepository::new());

    let service_context = Arc::new(ServiceContext::new(payment_repo, message_repo, &settings));

    let settings = Arc::new(settings);
    let app = api::create_app(service_context, settings.clone());

    let listener = tokio::net::TcpListener::bind(
        format!("{}:{}", settings.server.host, settings.server.port)
    ).await?;

    tracing::info!("Server listening on http://{}:{}", settings.server.host, settings.server.port);

    axum::serve(listener, app).await?;

    Ok(())
}
