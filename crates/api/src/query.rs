//! Shared query parameter types for API and page handlers.

use roster_core::search::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use serde::Deserialize;

/// Search + pagination parameters (`?q=&skip=&limit=`).
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub q: Option<String>,
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

impl ListParams {
    /// Search text; empty means "no filter".
    pub fn query(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }

    pub fn offset(&self) -> i64 {
        clamp_offset(self.skip)
    }

    pub fn limit(&self) -> i64 {
        clamp_limit(self.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_params_absent() {
        let params = ListParams::default();
        assert_eq!(params.query(), "");
        assert_eq!(params.offset(), 0);
        assert_eq!(params.limit(), DEFAULT_LIST_LIMIT);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let params = ListParams {
            q: Some("thor".into()),
            skip: Some(-4),
            limit: Some(1_000_000),
        };
        assert_eq!(params.offset(), 0);
        assert_eq!(params.limit(), MAX_LIST_LIMIT);
    }
}
