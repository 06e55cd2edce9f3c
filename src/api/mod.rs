pub mod handlers;
pub mod state;

use axum::{
    http::Method,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowHeaders, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{config::Settings, service::ServiceContext};
use state::AppState;

pub fn create_app(service_context: Arc<ServiceContext>, settings: Arc<Settings>) -> Router {
    let app_state = AppState::new(service_context, settings);

    Router::new()
        // Root and health endpoints
        .route("/", get(handlers::root::root))
        .route("/health", get(handlers::root::health_check))
        // API routes
        .nest("/api", api_routes())
        // Add state to the router
        .with_state(app_state)
        // Middleware
        .layer(CompressionLayer::new())
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

// The portal frontends run on arbitrary origins and send credentials, and
// tower-http rejects the `Any` wildcard combined with credentials, so the
// wildcard is expressed by mirroring whatever the request asks for.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_credentials(true)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/config", get(handlers::config::get_config))
        .nest("/payments", payment_routes())
        .nest("/messages", message_routes())
}

fn payment_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::payments::create))
        .route("/:id", get(handlers::payments::get))
        .route("/:id/qr.svg", get(handlers::payments::qr_svg))
        .route("/:id/success", post(handlers::payments::mark_success))
        .route("/:id/failed", post(handlers::payments::mark_failed))
}

fn message_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::messages::list))
        .route("/", post(handlers::messages::create))
        .route("/latest", delete(handlers::messages::delete_latest))
}
