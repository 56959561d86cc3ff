//! Configuration state and resolution.
//!
//! Two independently loaded sources feed one effective mapping:
//!
//! 1. **Global** — `~/.sac.yaml`, lowest precedence, loaded at startup.
//! 2. **Override** — `./.sac.yaml`, highest precedence, loaded on `init`.
//!
//! [`Config::resolve`] rebuilds the effective (`user`) mapping from
//! scratch: global entries first, override entries on top, then any key
//! whose resolved value is the empty string is pruned. An empty override
//! value is the "unset" signal for suppressing a global setting locally.

use std::collections::BTreeMap;
use std::env;

use tracing::debug;

use crate::error::{Result, SacError};
use crate::source;

/// A flat string-to-string mapping, as loaded from a single source file.
pub type RawMapping = BTreeMap<String, String>;

/// Name of the configuration file in both the home and current directory.
pub const CONFIG_FILE_NAME: &str = ".sac.yaml";

/// Layered configuration state.
///
/// `global` and `overrides` are inputs replaced wholesale by their
/// loaders; `user` is the derived effective mapping, rebuilt only by
/// [`resolve`](Self::resolve) and mutated only by the `set`/`delete`
/// command operations.
#[derive(Debug, Clone, Default)]
pub struct Config {
    global: RawMapping,
    overrides: RawMapping,
    user: RawMapping,
}

impl Config {
    /// Create a configuration from already-loaded sources.
    ///
    /// The effective mapping starts empty; call [`resolve`](Self::resolve)
    /// to derive it.
    #[must_use]
    pub fn with_sources(global: RawMapping, overrides: RawMapping) -> Self {
        Self {
            global,
            overrides,
            user: RawMapping::new(),
        }
    }

    /// Load the global source from `~/.sac.yaml`, replacing it wholesale.
    ///
    /// # Errors
    ///
    /// Returns `HomeDirUnavailable` if the home directory cannot be
    /// determined, or a loader error if the file exists but is unreadable
    /// or malformed.
    pub fn load_global(&mut self) -> Result<()> {
        let home = dirs::home_dir().ok_or(SacError::HomeDirUnavailable)?;
        self.global = source::load_mapping(&home.join(CONFIG_FILE_NAME))?;
        Ok(())
    }

    /// Load the override source from `./.sac.yaml`, replacing it wholesale.
    ///
    /// # Errors
    ///
    /// Returns `CurrentDirUnavailable` if the working directory cannot be
    /// determined, or a loader error if the file exists but is unreadable
    /// or malformed.
    pub fn load_local_override(&mut self) -> Result<()> {
        let cwd = env::current_dir().map_err(|e| SacError::CurrentDirUnavailable { source: e })?;
        self.overrides = source::load_mapping(&cwd.join(CONFIG_FILE_NAME))?;
        Ok(())
    }

    /// Rebuild the effective mapping from the loaded sources.
    ///
    /// Pure data transformation: global entries are copied in, override
    /// entries overwrite them on conflict, and keys resolving to the empty
    /// string are removed. Idempotent for unchanged sources.
    pub fn resolve(&mut self) {
        let mut user = self.global.clone();
        for (key, value) in &self.overrides {
            user.insert(key.clone(), value.clone());
        }
        let before = user.len();
        user.retain(|_, value| !value.is_empty());

        debug!(
            entries = user.len(),
            pruned = before - user.len(),
            "resolved effective configuration"
        );
        self.user = user;
    }

    /// Look up a key in the effective mapping.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.user.get(key).map(String::as_str)
    }

    /// Set a key in the effective mapping, overwriting any prior value.
    ///
    /// Setting an empty value is allowed; pruning happens only inside
    /// [`resolve`](Self::resolve).
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.user.insert(key.into(), value.into());
    }

    /// Remove a key from the effective mapping.
    ///
    /// Returns whether the key was present; deleting an absent key is not
    /// an error.
    pub fn delete(&mut self, key: &str) -> bool {
        self.user.remove(key).is_some()
    }

    /// The effective (merged, pruned, possibly mutated) mapping.
    #[must_use]
    pub fn user(&self) -> &RawMapping {
        &self.user
    }

    /// The loaded global source.
    #[must_use]
    pub fn global(&self) -> &RawMapping {
        &self.global
    }

    /// The loaded override source.
    #[must_use]
    pub fn overrides(&self) -> &RawMapping {
        &self.overrides
    }
}
