//! Wipe every catalog table and restart ID sequences at 1.
//!
//! Usage: `DATABASE_URL=... roster-reset-db`

use anyhow::Context;
use roster_db::repositories::MaintenanceRepo;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster_db=info,roster_reset_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = roster_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;

    roster_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    MaintenanceRepo::reset(&pool)
        .await
        .context("Failed to reset catalog tables")?;

    tracing::info!("Catalog reset complete");
    Ok(())
}
