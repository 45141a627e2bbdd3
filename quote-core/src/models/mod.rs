mod calculator_preset;
mod price_schedule;
mod quote;
mod script_request;
mod time_savings;

pub use calculator_preset::{CalculatorPreset, ServiceCategory};
pub use price_schedule::PriceSchedule;
pub use quote::{Quote, QuoteBreakdown};
pub use script_request::{Language, QuoteError, QuoteRequest, ScriptFeatures, ScriptRequest, TargetOs};
pub use time_savings::{SavingsInputError, TimeSavingsInput, TimeSavingsResult};
