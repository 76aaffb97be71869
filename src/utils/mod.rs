//! Utility functions for pylaunch

use std::env;

/// Variable lookup backed by the process environment
pub fn env_lookup(key: &str) -> Option<String> {
    env::var(key).ok()
}

/// Check if a variable is set to a truthy value
/// Accepts: "1", "true", "on", "yes", "t" (case insensitive)
pub fn is_var_true<F: Fn(&str) -> Option<String>>(lookup: F, key: &str) -> bool {
    lookup(key).is_some_and(|val| is_truthy(&val))
}

/// Truthy check shared by the variable helpers
pub fn is_truthy(value: &str) -> bool {
    let val_lower = value.trim().to_lowercase();
    matches!(val_lower.as_str(), "1" | "true" | "on" | "yes" | "t")
}

/// Read a variable, treating empty or whitespace-only values as unset
pub fn var_non_empty<F: Fn(&str) -> Option<String>>(lookup: F, key: &str) -> Option<String> {
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
