//! Boundaries to the external services a quote flows into.
//!
//! Both collaborators are opaque to this crate: a checkout provider that
//! turns an amount into a hosted payment page, and a job queue that hands a
//! request to whatever generates the script. Implementations live with the
//! binary that wires them up.

pub mod checkout;
pub mod jobs;

pub use checkout::{CheckoutError, CheckoutGateway, CheckoutRequest, CheckoutSession};
pub use jobs::{JobOutcome, JobQueue, JobQueueError};
