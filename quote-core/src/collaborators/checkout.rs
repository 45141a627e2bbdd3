use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("checkout amount must be greater than zero")]
    ZeroAmount,

    #[error("checkout provider rejected the request: {0}")]
    Rejected(String),

    #[error("checkout provider unreachable: {0}")]
    Connection(String),
}

/// Amount to charge plus the original request, kept as metadata on the
/// payment so fulfilment can rebuild what was ordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub cents: u64,
    #[serde(default)]
    pub payload: Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Where the browser should be redirected to pay.
    pub url: String,
}

#[async_trait]
pub trait CheckoutGateway: Send + Sync {
    async fn create_session(
        &self,
        request: CheckoutRequest,
    ) -> Result<CheckoutSession, CheckoutError>;
}
