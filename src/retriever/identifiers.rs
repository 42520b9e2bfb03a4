use crate::core::errors::{AppError, AppResult};

/// Canonical slug form used by the catalog: lowercase, spaces and underscores turned
/// into hyphens. Other punctuation passes through untouched.
pub fn normalize_identifier(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .map(|ch| if ch == ' ' || ch == '_' { '-' } else { ch })
        .collect()
}

/// Normalizes a whole input list, skipping blank entries. An input with nothing left
/// to query is rejected before any request is made.
pub fn normalize_identifiers(raw: &[String]) -> AppResult<Vec<String>> {
    let normalized = raw
        .iter()
        .filter(|identifier| !identifier.trim().is_empty())
        .map(|identifier| normalize_identifier(identifier))
        .collect::<Vec<_>>();

    if normalized.is_empty() {
        return Err(AppError::InvalidInput(
            "at least one identifier is required".to_string(),
        ));
    }
    Ok(normalized)
}
