use std::io;
use std::path::{Path, PathBuf};

use crate::input::Input;

/// Pre-flight check failures.
///
/// Validation stops at the first failed check, so a [`ValidationError`] always describes exactly
/// one missing path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The simulator executable does not exist at its expected location.
    #[error("simulator binary not found at '{}'. Run 'make' first.", .path.display())]
    EngineNotFound {
        /// Location that was checked.
        path: PathBuf,
    },
    /// A data input does not exist.
    #[error("{input} not found: {}", .path.display())]
    InputNotFound {
        /// Which input is missing.
        input: Input,
        /// The path supplied for it.
        path: PathBuf,
    },
}

impl ValidationError {
    /// The path that failed validation.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::EngineNotFound { path } | Self::InputNotFound { path, .. } => path,
        }
    }
}

/// The simulator could not be started.
#[derive(Debug, thiserror::Error)]
#[error("failed to run simulator '{}'", .program.display())]
pub struct LaunchError {
    program: PathBuf,
    #[source]
    source: io::Error,
}

impl LaunchError {
    /// Construct a new [`LaunchError`] for `program`.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(program: P, source: io::Error) -> Self {
        Self {
            program: program.into(),
            source,
        }
    }

    /// The executable that failed to launch.
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// The kind of the underlying I/O error.
    #[must_use]
    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }
}
