use std::sync::Arc;

use chrono::{DateTime, Utc};
use quote_core::{CheckoutGateway, JobQueue};

use crate::collaborators::{CommandJobQueue, HttpCheckoutGateway};
use crate::config::ServerConfig;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: ServerConfig,
    pub checkout: Option<Arc<dyn CheckoutGateway>>,
    pub jobs: Option<Arc<dyn JobQueue>>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(
        config: ServerConfig,
        checkout: Option<Arc<dyn CheckoutGateway>>,
        jobs: Option<Arc<dyn JobQueue>>,
    ) -> Self {
        Self {
            config,
            checkout,
            jobs,
            started_at: Utc::now(),
        }
    }

    /// Wires the collaborators named in `config`; a missing endpoint or
    /// program leaves that collaborator disabled.
    pub fn from_config(config: ServerConfig) -> Result<Self, reqwest::Error> {
        let checkout = HttpCheckoutGateway::from_config(&config.checkout, &config.site)?
            .map(|gateway| Arc::new(gateway) as Arc<dyn CheckoutGateway>);
        let jobs = CommandJobQueue::from_config(&config.jobs)
            .map(|queue| Arc::new(queue) as Arc<dyn JobQueue>);

        Ok(Self::new(config, checkout, jobs))
    }

    pub fn shared(self) -> SharedState {
        Arc::new(self)
    }
}
