use std::path::PathBuf;

use bgpsim::{
    run, validate, InvocationArgs, InvocationResult, LocalFs, ProcessEngine, DEFAULT_OUTPUT,
};

use clap::{Args, Parser};

use clap_verbosity_flag::{Verbosity, WarnLevel};

use tracing_log::AsTrace;

/// Entry-point function for the `bgpsim` CLI tool.
///
/// On success, returns the exit code of the simulator, which should become the exit code of the
/// current process.
///
/// # Errors
///
/// An error is returned if logging cannot be initialized, if validation fails, or if the
/// simulator cannot be started. Callers should report the error and exit with status `1`.
pub fn main() -> anyhow::Result<i32> {
    let args = Cli::parse();
    args.logging.init()?;

    let engine = ProcessEngine::default();
    let request = validate(&engine, &LocalFs, args.invocation()).map_err(|err| {
        tracing::debug!(path = %err.path().display(), "validation failed");
        err
    })?;
    tracing::debug!(?request, "inputs validated");

    let result = run(&engine, &request);
    if result.is_success() {
        tracing::info!(output = %request.output().display(), "simulation complete");
    }
    match result {
        InvocationResult::Exited(code) => Ok(code),
        InvocationResult::LaunchFailed(err) => Err(err.into()),
    }
}

const EXAMPLES: &str = "\
Examples:
  bgpsim --caida data/relationships.txt \\
         --announcements data/announcements.csv \\
         --output ribs.csv

  bgpsim --caida data/relationships.txt \\
         --announcements data/announcements.csv \\
         --rov-asns data/rov_asns.csv \\
         --output ribs.csv";

/// Run the BGP route simulator against CAIDA topology and announcement data.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None, after_help = EXAMPLES)]
struct Cli {
    /// Path to CAIDA AS relationships file.
    #[arg(long, visible_alias = "relationships", value_name = "PATH")]
    caida: PathBuf,

    /// Path to announcements CSV file (asn,prefix,rov_invalid).
    #[arg(long, value_name = "PATH")]
    announcements: PathBuf,

    /// Path to ROV ASNs CSV file.
    #[arg(long, value_name = "PATH")]
    rov_asns: Option<PathBuf>,

    /// Path to output CSV file.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    #[command(flatten, next_help_heading = "Logging options")]
    logging: LoggingOpts,
}

impl Cli {
    /// Get the user supplied simulator inputs.
    fn invocation(&self) -> InvocationArgs {
        let args = InvocationArgs::new(&self.caida, &self.announcements).with_output(&self.output);
        match self.rov_asns {
            Some(ref path) => args.with_rov_asns(path),
            None => args,
        }
    }
}

#[derive(Debug, Args)]
struct LoggingOpts {
    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

impl LoggingOpts {
    fn init(&self) -> anyhow::Result<()> {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(self.verbosity.log_level_filter().as_trace())
            .try_init()
            .map_err(|err| anyhow::anyhow!("failed to initialize logger: {err}"))
    }
}
