//! User working context derived from the effective configuration.
//!
//! Identity comes from the literal `name` and `email` keys. Racks (remote
//! references) and bags (local references) are stored in the flat mapping
//! as YAML text under the literal `racks` and `bags` keys and re-parsed
//! here into nested mappings. They are carried as opaque context; no
//! command operates on them.

use crate::config::RawMapping;
use crate::error::{Result, SacError};

/// Key holding the remote-reference mapping, YAML-encoded.
pub const RACKS_KEY: &str = "racks";
/// Key holding the local-reference mapping, YAML-encoded.
pub const BAGS_KEY: &str = "bags";

/// Identity and references resolved for the current invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserContext {
    pub name: String,
    pub email: String,
    /// Remote references, rack name to location.
    pub racks: RawMapping,
    /// Local references, bag name to location.
    pub bags: RawMapping,
}

impl UserContext {
    /// Build the user context from an effective mapping.
    ///
    /// Absent keys leave the corresponding field empty.
    ///
    /// # Errors
    ///
    /// Returns `NestedParse` if a `racks` or `bags` value is not itself a
    /// flat YAML mapping.
    pub fn from_mapping(user: &RawMapping) -> Result<Self> {
        let mut context = Self {
            name: user.get("name").cloned().unwrap_or_default(),
            email: user.get("email").cloned().unwrap_or_default(),
            ..Self::default()
        };

        if let Some(raw) = user.get(RACKS_KEY) {
            context.racks = parse_nested(RACKS_KEY, raw)?;
        }
        if let Some(raw) = user.get(BAGS_KEY) {
            context.bags = parse_nested(BAGS_KEY, raw)?;
        }

        Ok(context)
    }
}

fn parse_nested(key: &str, raw: &str) -> Result<RawMapping> {
    serde_yaml::from_str(raw).map_err(|e| SacError::NestedParse {
        key: key.to_string(),
        source: e,
    })
}
