use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use quote_core::collaborators::{CheckoutRequest, CheckoutSession};

use crate::error::ApiError;
use crate::state::SharedState;

pub async fn create_checkout(
    State(state): State<SharedState>,
    body: Result<Json<CheckoutRequest>, JsonRejection>,
) -> Result<Json<CheckoutSession>, ApiError> {
    let gateway = state.checkout.as_ref().ok_or(ApiError::CheckoutUnavailable)?;
    let Json(request) = body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let session = gateway.create_session(request).await?;
    Ok(Json(session))
}
