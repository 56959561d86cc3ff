//! Error types for `sac-lib`.
//!
//! Errors fall into two tiers: loader/environment failures, which the CLI
//! treats as fatal, and command-usage failures, which are reported to the
//! user and swallowed. [`SacError::is_recoverable`] encodes the split.

use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for sac-lib operations.
#[derive(Error, Debug)]
pub enum SacError {
    // === Environment Errors ===
    /// The user's home directory could not be determined.
    #[error("could not determine home directory")]
    HomeDirUnavailable,

    /// The current working directory could not be determined.
    #[error("could not determine current directory: {source}")]
    CurrentDirUnavailable { source: std::io::Error },

    // === Loader Errors ===
    /// A configuration file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A configuration file exists but is not a flat string mapping.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// A nested mapping stored as YAML text (racks/bags) is malformed.
    #[error("invalid nested mapping under '{key}': {source}")]
    NestedParse {
        key: String,
        source: serde_yaml::Error,
    },

    // === Output Errors ===
    /// JSON serialization error (for `--json` output views).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Command Errors ===
    /// `config` was invoked without a sub-command.
    #[error("config command requires a subcommand")]
    MissingSubcommand,

    /// A `config` sub-command was invoked without its required arguments.
    #[error("{subcommand} command requires {expected}")]
    MissingArguments {
        subcommand: String,
        expected: String,
    },

    /// `config get` was asked for a key that is not in the user mapping.
    #[error("no value found for key '{key}'")]
    KeyNotFound { key: String },

    /// `config` was invoked with an unrecognized sub-command name.
    #[error("unknown config subcommand: {name}")]
    UnknownSubcommand { name: String },
}

impl SacError {
    #[must_use]
    pub fn missing_arguments(subcommand: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::MissingArguments {
            subcommand: subcommand.into(),
            expected: expected.into(),
        }
    }

    #[must_use]
    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::KeyNotFound { key: key.into() }
    }

    /// Whether this error is a user-facing command error.
    ///
    /// Recoverable errors are printed and the process continues; everything
    /// else is a loader or environment failure that terminates the host.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::MissingSubcommand
                | Self::MissingArguments { .. }
                | Self::KeyNotFound { .. }
                | Self::UnknownSubcommand { .. }
        )
    }
}

/// Result type using `SacError`.
pub type Result<T> = std::result::Result<T, SacError>;
