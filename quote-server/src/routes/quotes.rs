use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use quote_core::QuoteRequest;
use quote_core::calculations::QuoteEngine;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ApiError;
use crate::state::SharedState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub quote_cents: u64,
}

pub async fn create_quote(
    State(state): State<SharedState>,
    body: Result<Json<QuoteRequest>, JsonRejection>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let Json(body) = body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let request = body.validate()?;

    let quote = QuoteEngine::new(&state.config.pricing).calculate(&request);
    info!(language = %request.language(), quote_cents = quote.quote_cents, "quote issued");

    Ok(Json(QuoteResponse {
        quote_cents: quote.quote_cents,
    }))
}
