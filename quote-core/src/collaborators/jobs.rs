use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JobQueueError {
    #[error("failed to start job submitter '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("job submitter '{program}' did not finish within {secs:.1}s")]
    TimedOut { program: String, secs: f64 },

    #[error("failed to encode job payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// What the submitter reported for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum JobOutcome {
    Queued,
    Error { error: String },
}

impl JobOutcome {
    pub fn is_queued(&self) -> bool {
        matches!(self, Self::Queued)
    }
}

#[async_trait]
pub trait JobQueue: Send + Sync {
    /// Hands `payload` to the queue exactly once. A submitter that ran but
    /// refused the job is an `Ok(JobOutcome::Error)`; only failing to run
    /// the submitter at all is an `Err`.
    async fn submit(
        &self,
        payload: &Value,
    ) -> Result<JobOutcome, JobQueueError>;
}
