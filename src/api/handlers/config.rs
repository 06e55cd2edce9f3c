use axum::{extract::State, Json};
use serde::Serialize;

use crate::{api::state::AppState, error::Result};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    pub owner_name: String,
    pub payee_name: String,
    pub upi_id: String,
    #[serde(rename = "amountINR")]
    pub amount_inr: String,
    pub note: String,
}

/// Static rent details for the landing page.
pub async fn get_config(State(state): State<AppState>) -> Result<Json<ConfigResponse>> {
    let rent = &state.settings.rent;

    Ok(Json(ConfigResponse {
        owner_name: rent.owner_name.clone(),
        payee_name: rent.payee_name.clone(),
        upi_id: rent.upi_id.clone(),
        amount_inr: rent.amount_inr.clone(),
        note: rent.note.clone(),
    }))
}
