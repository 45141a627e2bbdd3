use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use quote_core::collaborators::{JobOutcome, JobQueue, JobQueueError};
use serde_json::Value;
use tokio::process::Command;
use tracing::debug;

use crate::config::{DEFAULT_JOB_TIMEOUT_SECS, JobsConfig};

/// Submits jobs by running an external command once per request. The payload
/// is appended as `--args=[<json>]`. A submitter still running after the
/// timeout is killed.
pub struct CommandJobQueue {
    program: String,
    args: Vec<String>,
    working_dir: Option<PathBuf>,
    timeout: Duration,
}

impl CommandJobQueue {
    pub fn new(
        program: impl Into<String>,
        args: Vec<String>,
    ) -> Self {
        Self {
            program: program.into(),
            args,
            working_dir: None,
            timeout: Duration::from_secs(DEFAULT_JOB_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(
        mut self,
        timeout: Duration,
    ) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns `None` when no program is configured.
    pub fn from_config(jobs: &JobsConfig) -> Option<Self> {
        let program = jobs.program.clone()?;
        Some(Self {
            program,
            args: jobs.args.clone(),
            working_dir: jobs.working_dir.clone(),
            timeout: Duration::from_secs(jobs.timeout_secs),
        })
    }

    fn payload_arg(payload: &Value) -> Result<String, JobQueueError> {
        Ok(format!("--args=[{}]", serde_json::to_string(payload)?))
    }
}

#[async_trait]
impl JobQueue for CommandJobQueue {
    async fn submit(
        &self,
        payload: &Value,
    ) -> Result<JobOutcome, JobQueueError> {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .arg(Self::payload_arg(payload)?)
            .stdin(Stdio::null())
            .kill_on_drop(true);
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        debug!(program = %self.program, "submitting job");
        let output = tokio::time::timeout(self.timeout, command.output())
            .await
            .map_err(|_| JobQueueError::TimedOut {
                program: self.program.clone(),
                secs: self.timeout.as_secs_f64(),
            })?
            .map_err(|source| JobQueueError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if output.status.success() {
            Ok(JobOutcome::Queued)
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let error = if stderr.is_empty() {
                format!("job submitter exited with {}", output.status)
            } else {
                stderr
            };
            Ok(JobOutcome::Error { error })
        }
    }
}
