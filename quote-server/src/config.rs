//! Server configuration.
//!
//! Loaded from a TOML file; every table and field is optional and falls back
//! to the defaults below. Command-line flags override file values.
//!
//! ```toml
//! [server]
//! bind = "127.0.0.1"
//! port = 8080
//!
//! [site]
//! url = "https://example.com"
//!
//! [pricing]
//! base_cents = 15000
//!
//! [checkout]
//! endpoint = "https://payments.internal/sessions"
//! timeout_secs = 15
//!
//! [jobs]
//! program = "celery"
//! args = ["-A", "worker.tasks", "call", "worker.tasks.generate_script"]
//! ```

use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use quote_core::PriceSchedule;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "quote-server.toml";
pub const DEFAULT_BIND: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SITE_URL: &str = "http://localhost:3000";
pub const DEFAULT_CHECKOUT_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_JOB_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid bind address '{0}'")]
    BindAddress(String),

    #[error("[pricing] values are too large: the dearest quote would overflow")]
    PricingOverflow,

    #[error("[jobs] timeout_secs must be greater than zero")]
    ZeroJobTimeout,

    #[error("[checkout] timeout_secs must be greater than zero")]
    ZeroCheckoutTimeout,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub server: ListenConfig,
    pub site: SiteConfig,
    pub pricing: PriceSchedule,
    pub checkout: CheckoutConfig,
    pub jobs: JobsConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListenConfig {
    pub bind: String,
    pub port: u16,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Public URL of the marketing site; checkout redirects land here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SITE_URL.to_string(),
        }
    }
}

impl SiteConfig {
    pub fn success_url(&self) -> String {
        format!(
            "{}/success?session_id={{CHECKOUT_SESSION_ID}}",
            self.url.trim_end_matches('/')
        )
    }

    pub fn cancel_url(&self) -> String {
        format!("{}/cancelled", self.url.trim_end_matches('/'))
    }
}

/// Payment provider settings. Checkout is disabled while `endpoint` is unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutConfig {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub currency: String,
    pub product_name: String,
    pub timeout_secs: u64,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            currency: "usd".to_string(),
            product_name: "Custom Script".to_string(),
            timeout_secs: DEFAULT_CHECKOUT_TIMEOUT_SECS,
        }
    }
}

/// External job submitter. Job submission is disabled while `program` is unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobsConfig {
    pub program: Option<String>,
    pub args: Vec<String>,
    pub working_dir: Option<PathBuf>,
    pub timeout_secs: u64,
}

impl Default for JobsConfig {
    fn default() -> Self {
        Self {
            program: None,
            args: ["-A", "worker.tasks", "call", "worker.tasks.generate_script"]
                .into_iter()
                .map(String::from)
                .collect(),
            working_dir: None,
            timeout_secs: DEFAULT_JOB_TIMEOUT_SECS,
        }
    }
}

impl ServerConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values that parse but cannot be served.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pricing.max_quote_cents().is_none() {
            return Err(ConfigError::PricingOverflow);
        }
        if self.checkout.timeout_secs == 0 {
            return Err(ConfigError::ZeroCheckoutTimeout);
        }
        if self.jobs.timeout_secs == 0 {
            return Err(ConfigError::ZeroJobTimeout);
        }
        Ok(())
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Reads `path` when given. Without a path, reads
    /// [`DEFAULT_CONFIG_FILE`] from the working directory if it exists and
    /// otherwise uses the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    Self::from_file(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .server
            .bind
            .parse()
            .map_err(|_| ConfigError::BindAddress(self.server.bind.clone()))?;
        Ok(SocketAddr::new(ip, self.server.port))
    }
}
