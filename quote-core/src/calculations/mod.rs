//! Pricing and ROI calculations.
//!
//! Both calculators are pure: they take fully-formed inputs, never fail,
//! and never touch I/O. Input checking happens where requests enter the
//! system (see [`crate::models::QuoteRequest::validate`] and
//! [`crate::models::TimeSavingsInput::validate`]).

pub mod common;
pub mod quote;
pub mod savings;

pub use quote::{QuoteEngine, compute_quote};
pub use savings::{TimeSavingsCalculator, compute_savings};
