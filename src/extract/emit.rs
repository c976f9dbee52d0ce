//! Name validation and record emission.

use tracing::debug;

/// Determine if a candidate name is safe to output.
pub fn is_valid_name(name: &str, in_function_collection: bool) -> bool {
    if name.is_empty() || name.chars().any(char::is_whitespace) {
        return false;
    }
    if !in_function_collection {
        return false;
    }
    // Static members, class constants and namespaced symbols are unsupported.
    !name.contains("::") && !name.contains('\\')
}

/// First valid candidate, in document order.
pub fn pick_name(candidates: &[String], in_function_collection: bool) -> Option<&str> {
    candidates.iter().map(String::as_str).find(|name| {
        let valid = is_valid_name(name, in_function_collection);
        if !valid {
            debug!(name, "skipping invalid name");
        }
        valid
    })
}
