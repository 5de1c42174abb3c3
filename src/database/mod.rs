pub mod models;

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;
use thiserror::Error;
use tracing::info;

use crate::config::DatabaseConfig;

/// Errors raised while constructing the store client
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Invalid database URL")]
    InvalidDatabaseUrl,

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Build the connection pool once at startup. Connections are established
/// lazily; a store that is down surfaces as a per-request failure, not a
/// startup failure. The pool is handed to each service through application
/// state; nothing else owns a connection.
pub fn connect(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    let options = connect_options()?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .connect_lazy_with(options);

    info!("Created database pool (max_connections={})", config.max_connections);
    Ok(pool)
}

/// Connection parameters come from DATABASE_URL when present, otherwise from
/// the discrete DB_* variables with development defaults. TLS is always
/// requested; the server certificate is not verified (PgSslMode::Require).
fn connect_options() -> Result<PgConnectOptions, DatabaseError> {
    let options = if let Ok(url) = std::env::var("DATABASE_URL") {
        url.parse::<PgConnectOptions>()
            .map_err(|_| DatabaseError::InvalidDatabaseUrl)?
    } else {
        let host = std::env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
        let user = std::env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string());
        let password = std::env::var("DB_PASSWORD").unwrap_or_default();
        let database = std::env::var("DB_NAME").unwrap_or_else(|_| "rpv".to_string());
        let port = std::env::var("DB_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(5432);

        PgConnectOptions::new()
            .host(&host)
            .port(port)
            .username(&user)
            .password(&password)
            .database(&database)
    };

    Ok(options.ssl_mode(PgSslMode::Require))
}

/// Pings the pool to ensure connectivity
pub async fn health_check(pool: &PgPool) -> Result<(), DatabaseError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
