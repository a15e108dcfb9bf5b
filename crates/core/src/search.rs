//! Listing and search helpers.
//!
//! Shared by the repository layer (which builds `ILIKE` patterns) and the
//! API layer (which clamps user-supplied pagination).

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Default page size for character and team listings.
pub const DEFAULT_LIST_LIMIT: i64 = 100;

/// Maximum page size a client may request.
pub const MAX_LIST_LIMIT: i64 = 1000;

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

// ---------------------------------------------------------------------------
// Substring matching
// ---------------------------------------------------------------------------

/// Build a case-insensitive substring pattern for `ILIKE`.
///
/// Returns `None` for an empty query, meaning "no filter". Surrounding
/// whitespace is part of the query.
/// `%`, `_` and `\` in the input are escaped so they match literally
/// (PostgreSQL's default `LIKE` escape character is `\`).
///
/// # Examples
///
/// ```
/// use roster_core::search::like_pattern;
/// assert_eq!(like_pattern("spi"), Some("%spi%".to_string()));
/// assert_eq!(like_pattern("100%"), Some("%100\\%%".to_string()));
/// assert_eq!(like_pattern(""), None);
/// ```
pub fn like_pattern(query: &str) -> Option<String> {
    if query.is_empty() {
        return None;
    }

    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    Some(pattern)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- clamp_limit ---------------------------------------------------------

    #[test]
    fn clamp_limit_uses_default_when_none() {
        assert_eq!(clamp_limit(None, 100, 1000), 100);
    }

    #[test]
    fn clamp_limit_respects_max() {
        assert_eq!(clamp_limit(Some(5000), 100, 1000), 1000);
    }

    #[test]
    fn clamp_limit_floors_at_one() {
        assert_eq!(clamp_limit(Some(-5), 100, 1000), 1);
        assert_eq!(clamp_limit(Some(0), 100, 1000), 1);
    }

    // -- clamp_offset --------------------------------------------------------

    #[test]
    fn clamp_offset_defaults_to_zero() {
        assert_eq!(clamp_offset(None), 0);
    }

    #[test]
    fn clamp_offset_floors_negative() {
        assert_eq!(clamp_offset(Some(-3)), 0);
        assert_eq!(clamp_offset(Some(7)), 7);
    }

    // -- like_pattern --------------------------------------------------------

    #[test]
    fn like_pattern_keeps_surrounding_spaces() {
        assert_eq!(like_pattern(" man"), Some("% man%".to_string()));
        assert_eq!(like_pattern("  "), Some("%  %".to_string()));
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("a_b"), Some("%a\\_b%".to_string()));
        assert_eq!(like_pattern("x\\y"), Some("%x\\\\y%".to_string()));
    }

    #[test]
    fn like_pattern_empty_is_no_filter() {
        assert_eq!(like_pattern(""), None);
    }
}
