use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use crate::{
    command::EngineCommand,
    error::LaunchError,
    request::{LocalFs, Probe},
};

/// Location of the simulator executable, relative to the working directory.
pub const DEFAULT_ENGINE_PATH: &str = "./simulator";

/// Exit code reported when the simulator is killed without an exit status on non-unix platforms.
const UNKNOWN_STATUS: i32 = 1;

/// An external route simulator that can be run with an [`EngineCommand`].
pub trait Engine {
    /// The simulator executable.
    fn program(&self) -> &Path;

    /// Returns `true` if the simulator executable is present.
    fn is_available(&self) -> bool;

    /// Run `command` to completion and return its exit code.
    ///
    /// # Errors
    ///
    /// A [`LaunchError`] is returned if the simulator could not be started.
    fn execute(&self, command: &EngineCommand) -> Result<i32, LaunchError>;
}

/// [`Engine`] implementation that runs the simulator as a child process.
///
/// The child inherits the standard streams of the current process. Its output is never captured.
#[derive(Debug, Clone)]
pub struct ProcessEngine {
    program: PathBuf,
}

impl ProcessEngine {
    /// Construct a new [`ProcessEngine`] for the executable at `program`.
    pub fn new<P: Into<PathBuf>>(program: P) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for ProcessEngine {
    fn default() -> Self {
        Self::new(DEFAULT_ENGINE_PATH)
    }
}

impl Engine for ProcessEngine {
    fn program(&self) -> &Path {
        &self.program
    }

    fn is_available(&self) -> bool {
        LocalFs.exists(&self.program)
    }

    fn execute(&self, command: &EngineCommand) -> Result<i32, LaunchError> {
        tracing::debug!("spawning simulator: {command}");
        // `status` waits on the child, so it is always reaped before we return
        let status = Command::new(command.program())
            .args(command.args())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|err| LaunchError::new(command.program(), err))?;
        Ok(exit_code(status))
    }
}

fn exit_code(status: ExitStatus) -> i32 {
    status
        .code()
        .or_else(|| signal_code(status))
        .unwrap_or(UNKNOWN_STATUS)
}

#[cfg(unix)]
fn signal_code(status: ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt as _;
    status.signal().map(|signal| {
        tracing::warn!("simulator terminated by signal {signal}");
        128 + signal
    })
}

#[cfg(not(unix))]
const fn signal_code(_: ExitStatus) -> Option<i32> {
    None
}
