use sqlx_core::migrate::Migrator;
use sqlx_postgres::{PgPool, PgPoolOptions};
use std::path::Path;
use std::time::{Duration, Instant};
use tokio::time::sleep;
use tracing::{info, warn};

use crate::config::DatabaseConfig;

/// Directory holding the bundled schema migrations.
pub const MIGRATIONS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/migrations");

/// Build the shared connection pool.
///
/// The pool holds at most `max_connections`; callers beyond that wait up to
/// `acquire_timeout_secs` for a connection to be released. Startup retries
/// with backoff while Postgres comes up, then gives up.
///
/// # Errors
/// Returns an error if the connection string is invalid, the database stays
/// unreachable past the retry budget, or migrations fail.
pub async fn setup_database(config: &DatabaseConfig) -> Result<PgPool, anyhow::Error> {
    let options = config.connect_options()?;

    let retry_deadline = Duration::from_secs(60); // overall retry budget
    let max_interval = Duration::from_secs(30); // cap single waits
    let mut delay = Duration::from_millis(500);
    let start = Instant::now();

    let pool = loop {
        info!(
            host = options.get_host(),
            port = options.get_port(),
            max_connections = config.max_connections,
            "Attempting to connect to Postgres..."
        );

        match PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout())
            .connect_with(options.clone())
            .await
        {
            Ok(pool) => break pool,
            Err(err) => {
                if start.elapsed() >= retry_deadline {
                    warn!(error = %err, "Postgres not ready; retries exhausted");
                    return Err(err.into());
                }

                warn!(error = %err, "Postgres not ready yet; retrying");
                sleep(delay).await;
                delay = (delay.saturating_mul(2)).min(max_interval);
            }
        }
    };

    if config.run_migrations {
        run_migrations(&pool).await?;
    }

    Ok(pool)
}

/// Apply the bundled schema migrations.
///
/// # Errors
/// Returns an error if the migrations cannot be loaded or applied.
pub async fn run_migrations(pool: &PgPool) -> Result<(), anyhow::Error> {
    let migrator = Migrator::new(Path::new(MIGRATIONS_DIR)).await?;
    migrator.run(pool).await?;
    info!("Migrations applied");
    Ok(())
}
