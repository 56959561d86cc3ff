//! `sac_rust` - Layered configuration CLI library
//!
//! This crate provides the command surface for the `sac` CLI tool. The
//! resolution core lives in `sac-lib`; this crate adds argument parsing,
//! dispatch, output formatting, and logging.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface and dispatch using clap
//! - [`format`] - Output formatting (text, JSON)
//! - [`logging`] - Tracing subscriber setup
//!
//! Configuration loading, merging, and the effective-mapping operations
//! are re-exported from `sac-lib`.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod format;
pub mod logging;

pub use sac_lib::{CONFIG_FILE_NAME, Config, RawMapping, Result, SacError, UserContext};

/// Run the CLI application.
///
/// This is the main entry point called from `main()`. Only fatal
/// (loader-tier) errors are returned; command-usage errors are reported
/// to the user and swallowed by the dispatcher.
///
/// # Errors
///
/// Returns an error if startup loading fails or a fatal command error
/// occurs.
pub fn run() -> anyhow::Result<()> {
    cli::run()
}
