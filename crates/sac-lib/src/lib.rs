//! `sac-lib` — Layered configuration resolution library.
//!
//! Provides the in-process core of the `sac` CLI: loading flat key-value
//! sources from YAML files, merging a global (home-directory) source with
//! a per-directory override source, and exposing the resolved effective
//! mapping for command operations.
//!
//! # Quick Start
//!
//! ```
//! use sac_lib::{Config, RawMapping};
//!
//! let global: RawMapping = [("editor".to_string(), "vim".to_string())].into();
//! let overrides: RawMapping = [("editor".to_string(), String::new())].into();
//!
//! let mut config = Config::with_sources(global, overrides);
//! config.resolve();
//!
//! // The empty override value unset the global setting.
//! assert_eq!(config.get("editor"), None);
//!
//! // Command mutations act on the effective mapping only.
//! config.set("pager", "less");
//! assert_eq!(config.get("pager"), Some("less"));
//! ```

pub mod config;
pub mod error;
pub mod source;
pub mod user;

pub use config::{CONFIG_FILE_NAME, Config, RawMapping};
pub use error::{Result, SacError};
pub use user::UserContext;
