use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row counts for the dashboard. Soft-deleted rows are included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Stats {
    pub characters: i64,
    pub teams: i64,
    pub identities: i64,
}
