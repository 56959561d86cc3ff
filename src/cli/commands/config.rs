//! Config sub-command handler.
//!
//! Implements `set`/`get`/`delete`/`list` against the live effective
//! mapping. Every failure produced here is a recoverable usage error;
//! the dispatcher reports it and the process continues.

use tracing::debug;

use crate::cli::{ConfigCommand, ConfigSubcommand};
use crate::{Config, Result, SacError};
use crate::format::{ConfigEntry, ConfigListing, format_deleted_line, format_entry_line};

/// Execute a config sub-command against the effective mapping.
///
/// # Errors
///
/// Returns `MissingSubcommand`, `MissingArguments`, `KeyNotFound`, or
/// `UnknownSubcommand` for incomplete or unrecognized invocations.
pub fn execute(cmd: &ConfigCommand, config: &mut Config, json: bool) -> Result<()> {
    let Some(sub) = cmd.command.as_ref() else {
        return Err(SacError::MissingSubcommand);
    };

    match sub {
        ConfigSubcommand::Set { key, value } => {
            let (Some(key), Some(value)) = (key.as_deref(), value.as_deref()) else {
                return Err(SacError::missing_arguments("set", "a key and value"));
            };
            config.set(key, value);
            debug!(key, "set configuration value");
            Ok(())
        }

        ConfigSubcommand::Get { key } => {
            let Some(key) = key.as_deref() else {
                return Err(SacError::missing_arguments("get", "a key"));
            };
            let Some(value) = config.get(key) else {
                return Err(SacError::key_not_found(key));
            };
            if json {
                let entry = ConfigEntry::new(key, value);
                println!("{}", serde_json::to_string_pretty(&entry)?);
            } else {
                println!("{}", format_entry_line(key, value));
            }
            Ok(())
        }

        ConfigSubcommand::Delete { key } => {
            let Some(key) = key.as_deref() else {
                return Err(SacError::missing_arguments("delete", "a key"));
            };
            let existed = config.delete(key);
            debug!(key, existed, "deleted configuration value");
            println!("{}", format_deleted_line(key));
            Ok(())
        }

        ConfigSubcommand::List => {
            if config.user().is_empty() {
                println!("No configuration values found.");
            } else if json {
                let listing = ConfigListing::new(config.user());
                println!("{}", serde_json::to_string_pretty(&listing)?);
            } else {
                for (key, value) in config.user() {
                    println!("{}", format_entry_line(key, value));
                }
            }
            Ok(())
        }

        ConfigSubcommand::Other(tokens) => Err(SacError::UnknownSubcommand {
            name: tokens.first().cloned().unwrap_or_default(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RawMapping;

    fn command(sub: Option<ConfigSubcommand>) -> ConfigCommand {
        ConfigCommand { command: sub }
    }

    fn seeded_config(entries: &[(&str, &str)]) -> Config {
        let global: RawMapping = entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        let mut config = Config::with_sources(global, RawMapping::new());
        config.resolve();
        config
    }

    #[test]
    fn test_missing_subcommand() {
        let mut config = seeded_config(&[]);
        let err = execute(&command(None), &mut config, false).unwrap_err();
        assert!(matches!(err, SacError::MissingSubcommand));
    }

    #[test]
    fn test_set_requires_key_and_value() {
        let mut config = seeded_config(&[]);
        let cmd = command(Some(ConfigSubcommand::Set {
            key: Some("x".to_string()),
            value: None,
        }));
        let err = execute(&cmd, &mut config, false).unwrap_err();
        assert!(matches!(err, SacError::MissingArguments { .. }));
    }

    #[test]
    fn test_set_overwrites_and_allows_empty() {
        let mut config = seeded_config(&[("x", "1")]);
        let cmd = command(Some(ConfigSubcommand::Set {
            key: Some("x".to_string()),
            value: Some("2".to_string()),
        }));
        execute(&cmd, &mut config, false).unwrap();
        assert_eq!(config.get("x"), Some("2"));

        let cmd = command(Some(ConfigSubcommand::Set {
            key: Some("x".to_string()),
            value: Some(String::new()),
        }));
        execute(&cmd, &mut config, false).unwrap();
        assert_eq!(config.get("x"), Some(""));
    }

    #[test]
    fn test_get_missing_key() {
        let mut config = seeded_config(&[]);
        let cmd = command(Some(ConfigSubcommand::Get {
            key: Some("editor".to_string()),
        }));
        let err = execute(&cmd, &mut config, false).unwrap_err();
        assert!(matches!(err, SacError::KeyNotFound { .. }));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_get_requires_key() {
        let mut config = seeded_config(&[]);
        let cmd = command(Some(ConfigSubcommand::Get { key: None }));
        let err = execute(&cmd, &mut config, false).unwrap_err();
        assert!(matches!(err, SacError::MissingArguments { .. }));
    }

    #[test]
    fn test_delete_absent_key_succeeds() {
        let mut config = seeded_config(&[]);
        let cmd = command(Some(ConfigSubcommand::Delete {
            key: Some("ghost".to_string()),
        }));
        execute(&cmd, &mut config, false).unwrap();
    }

    #[test]
    fn test_delete_removes_key() {
        let mut config = seeded_config(&[("x", "1")]);
        let cmd = command(Some(ConfigSubcommand::Delete {
            key: Some("x".to_string()),
        }));
        execute(&cmd, &mut config, false).unwrap();
        assert_eq!(config.get("x"), None);
    }

    #[test]
    fn test_unknown_subcommand_names_token() {
        let mut config = seeded_config(&[]);
        let cmd = command(Some(ConfigSubcommand::Other(vec![
            "frobnicate".to_string(),
            "arg".to_string(),
        ])));
        let err = execute(&cmd, &mut config, false).unwrap_err();
        assert_eq!(err.to_string(), "unknown config subcommand: frobnicate");
    }

    #[test]
    fn test_list_runs_on_empty_mapping() {
        let mut config = seeded_config(&[]);
        execute(&command(Some(ConfigSubcommand::List)), &mut config, false).unwrap();
        execute(&command(Some(ConfigSubcommand::List)), &mut config, true).unwrap();
    }
}
