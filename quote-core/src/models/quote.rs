use serde::{Deserialize, Serialize};

/// Line-by-line surcharges that make up a quote, in cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteBreakdown {
    pub base: u64,
    pub language: u64,
    pub os: u64,
    pub packaging: u64,
    pub network: u64,
    pub scheduler: u64,
}

impl QuoteBreakdown {
    pub fn total(&self) -> u64 {
        self.base + self.language + self.os + self.packaging + self.network + self.scheduler
    }
}

/// Price of a custom-script request.
///
/// The amount is handed to checkout as an opaque number of cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub quote_cents: u64,
    pub breakdown: QuoteBreakdown,
}
