use crate::RawMapping;
use serde::{Deserialize, Serialize};

/// Single configuration entry for the get view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigEntry {
    pub key: String,
    pub value: String,
}

impl ConfigEntry {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Effective mapping with entry count for the list view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigListing {
    pub count: usize,
    pub entries: RawMapping,
}

impl ConfigListing {
    #[must_use]
    pub fn new(entries: &RawMapping) -> Self {
        Self {
            count: entries.len(),
            entries: entries.clone(),
        }
    }
}
