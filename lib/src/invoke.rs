use crate::{
    command::EngineCommand, engine::Engine, error::LaunchError, request::InvocationRequest,
};

/// The outcome of a simulator run.
#[derive(Debug)]
pub enum InvocationResult {
    /// The simulator ran to completion with the contained exit code.
    Exited(i32),
    /// The simulator could not be started.
    LaunchFailed(LaunchError),
}

impl InvocationResult {
    /// Exit code reported when the simulator could not be started.
    pub const LAUNCH_FAILURE: i32 = 1;

    /// The exit code to report for this outcome.
    ///
    /// The simulator's own exit code is returned unchanged.
    #[must_use]
    pub const fn code(&self) -> i32 {
        match self {
            Self::Exited(code) => *code,
            Self::LaunchFailed(_) => Self::LAUNCH_FAILURE,
        }
    }

    /// Returns `true` if the simulator ran and exited successfully.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Exited(0))
    }
}

/// Run the simulator once for a validated `request`, blocking until it exits.
///
/// Spawn failures are reported as [`InvocationResult::LaunchFailed`] even though `request` was
/// validated, since the simulator may have been removed or had its permissions changed in the
/// meantime. The simulator is never retried.
pub fn run<E>(engine: &E, request: &InvocationRequest) -> InvocationResult
where
    E: Engine + ?Sized,
{
    let command = EngineCommand::new(engine.program(), request);
    match engine.execute(&command) {
        Ok(code) => {
            tracing::info!("simulator exited with status {code}");
            InvocationResult::Exited(code)
        }
        Err(err) => {
            tracing::debug!("simulator launch failed: {err}");
            InvocationResult::LaunchFailed(err)
        }
    }
}
