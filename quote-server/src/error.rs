use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use quote_core::QuoteError;
use quote_core::collaborators::{CheckoutError, JobQueueError};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid request body: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Quote(#[from] QuoteError),

    #[error("checkout is not configured")]
    CheckoutUnavailable,

    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    #[error("job submission is not configured")]
    JobsUnavailable,

    #[error(transparent)]
    Jobs(#[from] JobQueueError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Quote(_) => StatusCode::BAD_REQUEST,
            ApiError::CheckoutUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Checkout(CheckoutError::ZeroAmount) => StatusCode::BAD_REQUEST,
            ApiError::Checkout(_) => StatusCode::BAD_GATEWAY,
            ApiError::JobsUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Jobs(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = serde_json::json!({
            "error": self.to_string(),
        });

        (status, axum::Json(body)).into_response()
    }
}
