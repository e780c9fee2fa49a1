//! Maintenance entry point
//!
//! Applies pending migrations, then restores owner subscriptions that a
//! failed create-time compensation left missing.

use communities::{CommunitiesConfig, OwnerIdentity};
use maintenance::PgContexts;
use platform::config::{ConfigError, PlatformConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let config = PlatformConfig::from_env()?;
    platform::telemetry::init(&config.log_filter);

    let pool = platform::database::connect(&config.database).await?;

    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    let owner_identity = match config.owner_identity.as_deref() {
        Some(raw) => raw
            .parse::<OwnerIdentity>()
            .map_err(|_| ConfigError::Invalid {
                key: "COMMUNITY_OWNER_IDENTITY",
                value: raw.to_string(),
            })?,
        None => OwnerIdentity::default(),
    };
    let communities_config = if cfg!(debug_assertions) {
        CommunitiesConfig::development()
    } else {
        CommunitiesConfig::default()
    }
    .with_owner_identity(owner_identity);

    let contexts = PgContexts::postgres(pool, communities_config);
    let report = contexts.reconcile_owners().execute().await?;

    if report.failed > 0 {
        tracing::warn!(
            failed = report.failed,
            "Some owner subscriptions could not be restored, rerun after fixing the owners"
        );
    }
    tracing::info!(
        scanned = report.scanned,
        repaired = report.repaired,
        "Maintenance finished"
    );

    Ok(())
}
