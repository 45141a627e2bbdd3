//! Custom-script quote calculation.
//!
//! A quote is a flat base price plus surcharges:
//!
//! | Line      | Default (cents)                                        |
//! |-----------|--------------------------------------------------------|
//! | Base      | 15000                                                  |
//! | Language  | python 0, bash 0, nodejs 1000, powershell 2000         |
//! | OS        | 1000 per distinct target OS                            |
//! | Packaging | 2000 when requested                                    |
//! | Network   | 1500 when the script needs network access              |
//! | Scheduler | 1000 when the script must run on a schedule            |
//!
//! # Example
//!
//! ```
//! use quote_core::calculations::QuoteEngine;
//! use quote_core::{Language, PriceSchedule, ScriptFeatures, ScriptRequest, TargetOs};
//!
//! let request = ScriptRequest::new(
//!     Language::Powershell,
//!     [TargetOs::Windows, TargetOs::Macos],
//!     ScriptFeatures {
//!         needs_packaging: true,
//!         ..Default::default()
//!     },
//! )
//! .unwrap();
//!
//! let schedule = PriceSchedule::default();
//! let quote = QuoteEngine::new(&schedule).calculate(&request);
//!
//! assert_eq!(quote.quote_cents, 21000);
//! ```

use tracing::debug;

use crate::models::{Language, PriceSchedule, Quote, QuoteBreakdown, ScriptFeatures, ScriptRequest};

/// Prices script requests against a [`PriceSchedule`].
#[derive(Debug, Clone)]
pub struct QuoteEngine<'a> {
    schedule: &'a PriceSchedule,
}

impl<'a> QuoteEngine<'a> {
    pub fn new(schedule: &'a PriceSchedule) -> Self {
        Self { schedule }
    }

    /// Computes the quote for a validated request.
    pub fn calculate(
        &self,
        request: &ScriptRequest,
    ) -> Quote {
        let features = request.features();

        let breakdown = QuoteBreakdown {
            base: self.schedule.base_cents,
            language: self.language_surcharge(request.language()),
            os: self.os_surcharge(request.os().len()),
            packaging: self.packaging_surcharge(features),
            network: self.network_surcharge(features),
            scheduler: self.scheduler_surcharge(features),
        };
        let quote_cents = breakdown.total();

        debug!(
            language = %request.language(),
            os_count = request.os().len(),
            quote_cents,
            "computed script quote"
        );

        Quote {
            quote_cents,
            breakdown,
        }
    }

    fn language_surcharge(
        &self,
        language: Language,
    ) -> u64 {
        self.schedule.language_surcharge(language)
    }

    fn os_surcharge(
        &self,
        os_count: usize,
    ) -> u64 {
        self.schedule.per_os_cents * os_count as u64
    }

    fn packaging_surcharge(
        &self,
        features: ScriptFeatures,
    ) -> u64 {
        if features.needs_packaging {
            self.schedule.packaging_cents
        } else {
            0
        }
    }

    fn network_surcharge(
        &self,
        features: ScriptFeatures,
    ) -> u64 {
        if features.requires_network {
            self.schedule.network_cents
        } else {
            0
        }
    }

    fn scheduler_surcharge(
        &self,
        features: ScriptFeatures,
    ) -> u64 {
        if features.needs_scheduler {
            self.schedule.scheduler_cents
        } else {
            0
        }
    }
}

/// Prices a request with the default schedule.
pub fn compute_quote(request: &ScriptRequest) -> Quote {
    QuoteEngine::new(&PriceSchedule::default()).calculate(request)
}
