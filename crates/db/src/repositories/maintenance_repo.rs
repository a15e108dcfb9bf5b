//! Development maintenance: wipe the catalog.

use sqlx::PgPool;

pub struct MaintenanceRepo;

impl MaintenanceRepo {
    /// Remove every catalog row and restart all ID sequences at 1.
    pub async fn reset(pool: &PgPool) -> Result<(), sqlx::Error> {
        sqlx::query(
            "TRUNCATE TABLE character_team, secret_identities, characters, teams
             RESTART IDENTITY",
        )
        .execute(pool)
        .await?;
        tracing::info!("Catalog tables truncated and sequences restarted");
        Ok(())
    }
}
