use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_DATABASE_HOST, DEFAULT_DATABASE_NAME,
    DEFAULT_DATABASE_PORT, DEFAULT_DATABASE_USER, DEFAULT_MAX_CONNECTIONS, MAX_MAX_CONNECTIONS,
    MIN_MAX_CONNECTIONS, SslMode,
};

use std::fmt;

use serde::Deserialize;

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub dbname: String,
    pub sslmode: SslMode,
    /// Upper bound on pooled connections
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_DATABASE_HOST),
            port: DEFAULT_DATABASE_PORT,
            user: String::from(DEFAULT_DATABASE_USER),
            password: String::new(),
            dbname: String::from(DEFAULT_DATABASE_NAME),
            sslmode: SslMode::default(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

// Password is redacted so configs can be logged with {:?}
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("dbname", &self.dbname)
            .field("sslmode", &self.sslmode)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::database("database.host cannot be empty"));
        }

        if self.port == 0 {
            return Err(ConfigError::database("database.port cannot be 0"));
        }

        if self.user.trim().is_empty() {
            return Err(ConfigError::database("database.user cannot be empty"));
        }

        if self.dbname.trim().is_empty() {
            return Err(ConfigError::database("database.dbname cannot be empty"));
        }

        if self.max_connections < MIN_MAX_CONNECTIONS || self.max_connections > MAX_MAX_CONNECTIONS
        {
            return Err(ConfigError::database(format!(
                "database.max_connections must be {}-{}, got {}",
                MIN_MAX_CONNECTIONS, MAX_MAX_CONNECTIONS, self.max_connections
            )));
        }

        Ok(())
    }
}
