//! Flat-mapping file loader.
//!
//! A source file is a YAML document containing a flat string-to-string
//! mapping. A missing file is an empty source, not an error; a file that
//! exists but cannot be read or parsed is a typed failure the host decides
//! how to handle.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::RawMapping;
use crate::error::{Result, SacError};

/// Load a flat string-to-string mapping from a YAML file.
///
/// The file handle is scoped inside the read and released on every exit
/// path. An empty or whitespace-only document yields an empty mapping.
///
/// # Errors
///
/// Returns `Read` if the file exists but cannot be read, or `Parse` if its
/// content is not a flat string mapping. A missing file is `Ok(empty)`.
pub fn load_mapping(path: &Path) -> Result<RawMapping> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "source file absent, using empty mapping");
            return Ok(RawMapping::new());
        }
        Err(e) => {
            return Err(SacError::Read {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    // An empty document deserializes to nothing useful; treat it as an
    // empty source the same way an absent file is.
    if content.trim().is_empty() {
        return Ok(RawMapping::new());
    }

    let mapping: RawMapping = serde_yaml::from_str(&content).map_err(|e| SacError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;

    debug!(path = %path.display(), entries = mapping.len(), "loaded source file");
    Ok(mapping)
}
