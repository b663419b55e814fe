use std::path::{Path, PathBuf};

use crate::{engine::Engine, error::ValidationError, input::Input};

/// Output path used when none is given.
pub const DEFAULT_OUTPUT: &str = "ribs.csv";

/// Filesystem existence check used during validation.
pub trait Probe {
    /// Returns `true` if `path` exists.
    fn exists(&self, path: &Path) -> bool;
}

/// [`Probe`] implementation backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl Probe for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.try_exists().unwrap_or_else(|err| {
            tracing::warn!("failed to check for '{}': {err}", path.display());
            false
        })
    }
}

/// Unvalidated simulator inputs, as supplied by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationArgs {
    caida: PathBuf,
    announcements: PathBuf,
    rov_asns: Option<PathBuf>,
    output: Option<PathBuf>,
}

impl InvocationArgs {
    /// Construct a new set of arguments from the two required inputs.
    pub fn new<C, A>(caida: C, announcements: A) -> Self
    where
        C: Into<PathBuf>,
        A: Into<PathBuf>,
    {
        Self {
            caida: caida.into(),
            announcements: announcements.into(),
            rov_asns: None,
            output: None,
        }
    }

    /// Set the ROV ASNs input.
    #[must_use]
    pub fn with_rov_asns<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.rov_asns = Some(path.into());
        self
    }

    /// Set the output path.
    #[must_use]
    pub fn with_output<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output = Some(path.into());
        self
    }
}

/// A validated simulator invocation.
///
/// Only [`validate`] constructs this type, so every required input existed when it was created.
/// The filesystem may change afterwards; [`run`](crate::run) does not rely on it staying put.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    caida: PathBuf,
    announcements: PathBuf,
    rov_asns: Option<PathBuf>,
    output: PathBuf,
}

impl InvocationRequest {
    /// Get the CAIDA AS-relationships path.
    #[must_use]
    pub fn caida(&self) -> &Path {
        &self.caida
    }

    /// Get the announcements path.
    #[must_use]
    pub fn announcements(&self) -> &Path {
        &self.announcements
    }

    /// Get the ROV ASNs path, if one was supplied.
    #[must_use]
    pub fn rov_asns(&self) -> Option<&Path> {
        self.rov_asns.as_deref()
    }

    /// Get the output RIB path.
    #[must_use]
    pub fn output(&self) -> &Path {
        &self.output
    }
}

/// Check the preconditions for running `engine` with `args`.
///
/// Checks run in a fixed order and stop at the first failure:
///
/// 1. the simulator executable,
/// 2. the CAIDA file,
/// 3. the announcements file,
/// 4. the ROV ASNs file, if given.
///
/// No data path is probed when the simulator is missing.
///
/// # Errors
///
/// A [`ValidationError`] describing the first missing path.
pub fn validate<E, P>(
    engine: &E,
    probe: &P,
    args: InvocationArgs,
) -> Result<InvocationRequest, ValidationError>
where
    E: Engine + ?Sized,
    P: Probe + ?Sized,
{
    if !engine.is_available() {
        return Err(ValidationError::EngineNotFound {
            path: engine.program().to_path_buf(),
        });
    }
    let InvocationArgs {
        caida,
        announcements,
        rov_asns,
        output,
    } = args;
    let check = |input, path: PathBuf| {
        if probe.exists(&path) {
            Ok(path)
        } else {
            Err(ValidationError::InputNotFound { input, path })
        }
    };
    let caida = check(Input::Caida, caida)?;
    let announcements = check(Input::Announcements, announcements)?;
    let rov_asns = rov_asns
        .map(|path| check(Input::RovAsns, path))
        .transpose()?;
    Ok(InvocationRequest {
        caida,
        announcements,
        rov_asns,
        output: output.unwrap_or_else(|| DEFAULT_OUTPUT.into()),
    })
}
