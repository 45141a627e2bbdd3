use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use chrono::Utc;
use serde::Serialize;

use crate::state::{AppState, SharedState};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
    pub uptime_secs: i64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<String>,
}

/// Builds the health report. Unconfigured collaborators make the service
/// degraded: quotes still work, but orders cannot complete.
pub fn health_report(state: &AppState) -> (StatusCode, HealthResponse) {
    let now = Utc::now();

    let mut issues = Vec::new();
    if state.checkout.is_none() {
        issues.push("checkout endpoint is not configured".to_string());
    }
    if state.jobs.is_none() {
        issues.push("job submitter is not configured".to_string());
    }

    let (status, code) = if issues.is_empty() {
        ("healthy", StatusCode::OK)
    } else {
        ("degraded", StatusCode::SERVICE_UNAVAILABLE)
    };

    (
        code,
        HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            timestamp: now.to_rfc3339(),
            uptime_secs: (now - state.started_at).num_seconds(),
            issues,
        },
    )
}

pub async fn health(State(state): State<SharedState>) -> impl IntoResponse {
    let (code, report) = health_report(&state);

    (
        code,
        [(header::CACHE_CONTROL, "no-cache, no-store, must-revalidate")],
        Json(report),
    )
}

pub async fn health_head() -> StatusCode {
    StatusCode::OK
}
