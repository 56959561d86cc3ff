//! Text formatting functions for `sac_rust`.

/// Format a single `key: value` line.
#[must_use]
pub fn format_entry_line(key: &str, value: &str) -> String {
    format!("{key}: {value}")
}

/// Confirmation line for a delete operation.
#[must_use]
pub fn format_deleted_line(key: &str) -> String {
    format!("Deleted key '{key}' from user configuration.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_line() {
        assert_eq!(format_entry_line("editor", "vim"), "editor: vim");
        assert_eq!(format_entry_line("x", ""), "x: ");
    }

    #[test]
    fn test_deleted_line() {
        assert_eq!(
            format_deleted_line("editor"),
            "Deleted key 'editor' from user configuration."
        );
    }
}
