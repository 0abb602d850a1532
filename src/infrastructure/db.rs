use std::time::Duration;

use anyhow::Context;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use tracing::{info, warn};

use crate::config::Config;
use crate::infrastructure::repositories::postgres::PgPool;

const SCHEMA_RETRY_ATTEMPTS: u32 = 5;
const SCHEMA_RETRY_DELAY: Duration = Duration::from_secs(2);

/// Builds the pool without connecting; the first statement (the schema
/// bootstrap) establishes the initial connection.
pub fn connect(config: &Config) -> anyhow::Result<PgPool> {
    let options = match &config.database_url {
        // TLS required but the certificate is not verified, matching the
        // hosted-Postgres setups this service is deployed against.
        Some(url) => url
            .parse::<PgConnectOptions>()
            .context("invalid DATABASE_URL")?
            .ssl_mode(PgSslMode::Require),
        None => PgConnectOptions::new().ssl_mode(PgSslMode::Disable),
    };

    Ok(PgPoolOptions::new()
        .max_connections(10)
        .connect_lazy_with(options))
}

pub async fn ensure_schema(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id SERIAL PRIMARY KEY,
            name TEXT,
            email TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

/// Runs the idempotent table creation before the server accepts traffic,
/// retrying a bounded number of times with a fixed delay. The final failure
/// is returned to the caller so process supervision sees a non-zero exit.
pub async fn bootstrap(pool: &PgPool) -> anyhow::Result<()> {
    let mut attempt = 1;
    loop {
        match ensure_schema(pool).await {
            Ok(()) => {
                info!("users table ready");
                return Ok(());
            }
            Err(err) if attempt < SCHEMA_RETRY_ATTEMPTS => {
                warn!(
                    attempt,
                    error = %err,
                    "failed to create users table, retrying in {}s",
                    SCHEMA_RETRY_DELAY.as_secs()
                );
                tokio::time::sleep(SCHEMA_RETRY_DELAY).await;
                attempt += 1;
            }
            Err(err) => return Err(err).context("creating users table"),
        }
    }
}
