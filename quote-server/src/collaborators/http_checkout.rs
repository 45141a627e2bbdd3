use std::time::Duration;

use async_trait::async_trait;
use quote_core::collaborators::{CheckoutError, CheckoutGateway, CheckoutRequest, CheckoutSession};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::config::{CheckoutConfig, SiteConfig};

/// Creates hosted payment sessions by POSTing to an HTTP payment endpoint.
pub struct HttpCheckoutGateway {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
    currency: String,
    product_name: String,
    success_url: String,
    cancel_url: String,
}

#[derive(Deserialize)]
struct SessionReply {
    url: String,
}

impl HttpCheckoutGateway {
    /// Returns `Ok(None)` when no endpoint is configured. Every provider
    /// call is bounded by `checkout.timeout_secs`.
    pub fn from_config(
        checkout: &CheckoutConfig,
        site: &SiteConfig,
    ) -> Result<Option<Self>, reqwest::Error> {
        let Some(endpoint) = checkout.endpoint.clone() else {
            return Ok(None);
        };
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(checkout.timeout_secs))
            .build()?;

        Ok(Some(Self {
            client,
            endpoint,
            api_key: checkout.api_key.clone(),
            currency: checkout.currency.clone(),
            product_name: checkout.product_name.clone(),
            success_url: site.success_url(),
            cancel_url: site.cancel_url(),
        }))
    }

    /// Body sent to the payment endpoint: one line item for the quoted amount,
    /// with the serialized order kept as metadata.
    pub fn session_body(
        &self,
        request: &CheckoutRequest,
    ) -> Value {
        let metadata = match &request.payload {
            Value::Null => "{}".to_string(),
            other => other.to_string(),
        };

        json!({
            "amount_cents": request.cents,
            "currency": self.currency,
            "product_name": self.product_name,
            "quantity": 1,
            "success_url": self.success_url,
            "cancel_url": self.cancel_url,
            "metadata": { "request": metadata },
        })
    }
}

#[async_trait]
impl CheckoutGateway for HttpCheckoutGateway {
    async fn create_session(
        &self,
        request: CheckoutRequest,
    ) -> Result<CheckoutSession, CheckoutError> {
        if request.cents == 0 {
            return Err(CheckoutError::ZeroAmount);
        }

        let mut call = self.client.post(&self.endpoint).json(&self.session_body(&request));
        if let Some(key) = &self.api_key {
            call = call.bearer_auth(key);
        }

        debug!(endpoint = %self.endpoint, cents = request.cents, "creating checkout session");
        let response = call
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CheckoutError::Connection(format!("timed out: {e}"))
                } else {
                    CheckoutError::Connection(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            warn!(%status, %detail, "checkout provider refused session");
            return Err(CheckoutError::Rejected(format!("{status}: {detail}")));
        }

        let reply: SessionReply = response
            .json()
            .await
            .map_err(|e| CheckoutError::Rejected(format!("unreadable reply: {e}")))?;

        Ok(CheckoutSession { url: reply.url })
    }
}
