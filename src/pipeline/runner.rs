//! Blocking execution of a composed MALLET invocation

use std::process::ExitStatus;
use std::time::{Duration, Instant};

use tracing::{debug, info, instrument, warn};

use super::error::{PipelineError, PipelineResult};
use super::invocation::MalletInvocation;

/// How the exit status of the external tool is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExitPolicy {
    /// Log a non-zero exit and carry on
    #[default]
    Ignore,
    /// Turn a non-zero exit into [`PipelineError::ToolFailed`]
    Strict,
}

impl ExitPolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            Self::Strict
        } else {
            Self::Ignore
        }
    }
}

/// Result of a completed (not necessarily successful) tool run
#[derive(Debug, Clone, Copy)]
pub struct RunOutcome {
    pub status: ExitStatus,
    pub elapsed: Duration,
}

impl RunOutcome {
    pub fn success(&self) -> bool {
        self.status.success()
    }
}

/// Run `invocation` to completion with inherited stdio.
///
/// Failing to launch the program is always an error. A non-zero exit is an
/// error only under [`ExitPolicy::Strict`].
#[instrument(skip_all, fields(program = %invocation.program().to_string_lossy()))]
pub fn run_invocation(
    invocation: &MalletInvocation,
    policy: ExitPolicy,
) -> PipelineResult<RunOutcome> {
    info!(command = %invocation, "running external tool");

    let start = Instant::now();
    let status = invocation
        .to_command()
        .status()
        .map_err(|source| PipelineError::Spawn {
            program: invocation.program().to_string_lossy().into_owned(),
            source,
        })?;
    let elapsed = start.elapsed();

    debug!(%status, ?elapsed, "external tool exited");

    if !status.success() {
        if policy == ExitPolicy::Strict {
            return Err(PipelineError::ToolFailed {
                program: invocation.program().to_string_lossy().into_owned(),
                status,
            });
        }
        warn!(%status, "external tool reported failure; continuing");
    }

    Ok(RunOutcome { status, elapsed })
}
