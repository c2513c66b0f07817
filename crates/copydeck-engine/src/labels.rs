//! Case and punctuation insensitive label keys.

/// Lowercases `label` and drops every character outside `[a-z0-9]`.
///
/// "One-liner", "One liner" and "ONELINER" all map to `"oneliner"`. Total:
/// the empty string maps to the empty string.
#[must_use]
pub fn normalize_label(label: &str) -> String {
    label
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}
