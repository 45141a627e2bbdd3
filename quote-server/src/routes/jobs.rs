use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use quote_core::collaborators::JobOutcome;
use serde_json::Value;
use tracing::{info, warn};

use crate::error::ApiError;
use crate::state::SharedState;

/// Forwards the request body to the job submitter unchanged.
pub async fn submit_job(
    State(state): State<SharedState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<JobOutcome>), ApiError> {
    let queue = state.jobs.as_ref().ok_or(ApiError::JobsUnavailable)?;
    let Json(payload) = body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let outcome = queue.submit(&payload).await?;
    let status = match &outcome {
        JobOutcome::Queued => {
            info!("job queued");
            StatusCode::OK
        }
        JobOutcome::Error { error } => {
            warn!(%error, "job submitter refused the job");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    Ok((status, Json(outcome)))
}
