//! Route-matching normalization.

/// Reduces a path to the form route tables are keyed by: query and fragment
/// dropped, trailing slashes trimmed, empty result mapped to `/`.
pub fn normalize_path(path: &str) -> String {
    let without_query = path.split('?').next().unwrap_or_default();
    let without_fragment = without_query.split('#').next().unwrap_or_default();
    let trimmed = without_fragment.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}
