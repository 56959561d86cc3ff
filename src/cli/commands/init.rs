//! Init command implementation.

use tracing::info;

use crate::{CONFIG_FILE_NAME, Config, Result};

/// Execute the init command.
///
/// Loads the per-directory override file (absence is fine) and rebuilds
/// the effective configuration on top of the already-loaded global
/// source.
///
/// # Errors
///
/// Returns an error if the override file exists but cannot be read or
/// parsed.
pub fn execute(config: &mut Config) -> Result<()> {
    config.load_local_override()?;
    config.resolve();

    info!(
        overrides = config.overrides().len(),
        entries = config.user().len(),
        "initialized local configuration"
    );
    println!(
        "Initialized configuration from {CONFIG_FILE_NAME}: {} value(s) resolved.",
        config.user().len()
    );
    Ok(())
}
