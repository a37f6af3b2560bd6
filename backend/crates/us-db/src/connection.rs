use crate::Result as DbErrorResult;

use us_config::{DatabaseConfig, SslMode};

use log::info;
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};

/// Build connection options from the `database` config section
pub fn connect_options(config: &DatabaseConfig) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.dbname)
        .ssl_mode(pg_ssl_mode(config.sslmode))
}

/// Open the shared connection pool
pub async fn connect(config: &DatabaseConfig) -> DbErrorResult<PgPool> {
    info!(
        "Connecting to database {}@{}:{}/{}",
        config.user, config.host, config.port, config.dbname
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(connect_options(config))
        .await?;

    info!("Database connection established");

    Ok(pool)
}

fn pg_ssl_mode(mode: SslMode) -> PgSslMode {
    match mode {
        SslMode::Disable => PgSslMode::Disable,
        SslMode::Allow => PgSslMode::Allow,
        SslMode::Prefer => PgSslMode::Prefer,
        SslMode::Require => PgSslMode::Require,
        SslMode::VerifyCa => PgSslMode::VerifyCa,
        SslMode::VerifyFull => PgSslMode::VerifyFull,
    }
}
