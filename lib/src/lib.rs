//! Support library for `bgpsim`.
//!
//! `bgpsim` is a thin front end to an external BGP route simulator. This crate validates the
//! simulator's input paths, builds its argument vector and runs it as a child process,
//! forwarding the child's exit status.
//!
//! # Examples
//!
//! ``` no_run
//! use bgpsim::{validate, run, InvocationArgs, LocalFs, ProcessEngine};
//!
//! let engine = ProcessEngine::default();
//! let args = InvocationArgs::new("data/relationships.txt", "data/announcements.csv")
//!     .with_rov_asns("data/rov_asns.csv");
//! let request = validate(&engine, &LocalFs, args)?;
//! std::process::exit(run(&engine, &request).code());
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```
#![doc(html_root_url = "https://docs.rs/bgpsim-lib/0.1.0-alpha.1")]
// clippy lints
#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_pub_crate)]
#![allow(clippy::multiple_crate_versions)]
// rustc lints
#![warn(absolute_paths_not_starting_with_crate)]
#![warn(deprecated_in_future)]
#![warn(elided_lifetimes_in_paths)]
#![warn(explicit_outlives_requirements)]
#![warn(keyword_idents)]
#![warn(macro_use_extern_crate)]
#![warn(meta_variable_misuse)]
#![warn(missing_abi)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(noop_method_call)]
#![warn(single_use_lifetimes)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unsafe_code)]
#![warn(unsafe_op_in_unsafe_fn)]
#![warn(unstable_features)]
#![warn(unused_crate_dependencies)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
#![warn(unused_results)]
#![warn(variant_size_differences)]
// docs.rs build config
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

/// Construction of the simulator argument vector.
pub mod command;
pub use self::command::EngineCommand;

/// The external simulator capability.
pub mod engine;
pub use self::engine::{Engine, ProcessEngine, DEFAULT_ENGINE_PATH};

/// Error types.
pub mod error;
pub use self::error::{LaunchError, ValidationError};

/// Simulator data inputs.
pub mod input;
pub use self::input::Input;

/// Running a validated request.
pub mod invoke;
pub use self::invoke::{run, InvocationResult};

/// Pre-flight validation of user supplied paths.
pub mod request;
pub use self::request::{
    validate, InvocationArgs, InvocationRequest, LocalFs, Probe, DEFAULT_OUTPUT,
};
