use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};

use crate::{
    api::state::AppState,
    domain::Payment,
    error::{AppError, Result},
};

pub async fn create(State(state): State<AppState>) -> Result<Json<Payment>> {
    let payment = state.service_context.payment_service.initiate().await?;

    Ok(Json(payment))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Payment>> {
    let payment = state
        .service_context
        .payment_service
        .find(&id)
        .await?
        .ok_or(AppError::NotFound("Payment not found".to_string()))?;

    Ok(Json(payment))
}

pub async fn mark_success(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Payment>> {
    let payment = state
        .service_context
        .payment_service
        .mark_success(&id)
        .await?
        .ok_or(AppError::NotFound("Payment not found".to_string()))?;

    Ok(Json(payment))
}

pub async fn mark_failed(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Payment>> {
    let payment = state
        .service_context
        .payment_service
        .mark_failed(&id)
        .await?
        .ok_or(AppError::NotFound("Payment not found".to_string()))?;

    Ok(Json(payment))
}

pub async fn qr_svg(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let svg = state
        .service_context
        .payment_service
        .qr_svg(&id)
        .await?
        .ok_or(AppError::NotFound("Payment not found".to_string()))?;

    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg))
}
