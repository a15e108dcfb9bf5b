//! Read-only aggregate counts for the dashboard and report.

use sqlx::PgPool;

use crate::models::stats::Stats;

pub struct StatsRepo;

impl StatsRepo {
    /// Count all characters, teams, and secret identities, regardless of
    /// the active flag.
    pub async fn counts(pool: &PgPool) -> Result<Stats, sqlx::Error> {
        sqlx::query_as::<_, Stats>(
            "SELECT
                (SELECT COUNT(*) FROM characters) AS characters,
                (SELECT COUNT(*) FROM teams) AS teams,
                (SELECT COUNT(*) FROM secret_identities) AS identities",
        )
        .fetch_one(pool)
        .await
    }
}
