use crate::{
    CONFIG_EXTENSIONS, ConfigError, ConfigErrorResult, DatabaseConfig, LoggingConfig,
    ServerConfig,
};

use std::path::Path;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config from the YAML file at `path`.
    ///
    /// Loading order:
    /// 1. Reject paths without a `.yaml` / `.yml` extension
    /// 2. Parse the file (an empty file yields defaults)
    /// 3. Apply US_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load(path: &Path) -> ConfigErrorResult<Self> {
        Self::check_extension(path)?;

        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut config = Self::parse_yaml(path, &contents)?;
        config.apply_env_overrides();

        Ok(config)
    }

    fn check_extension(path: &Path) -> ConfigErrorResult<()> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase());

        match extension {
            Some(ext) if CONFIG_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
            _ => Err(ConfigError::config(format!(
                "invalid config file name '{}': expected a .yaml or .yml file",
                path.display()
            ))),
        }
    }

    fn parse_yaml(path: &Path, contents: &str) -> ConfigErrorResult<Self> {
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml_ng::from_str(contents).map_err(|e| ConfigError::Yaml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;

        Ok(())
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        self.server.bind_addr()
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}", self.server.bind_addr());
        info!(
            "  database: {}@{}:{}/{} (sslmode={}, max {} connections)",
            self.database.user,
            self.database.host,
            self.database.port,
            self.database.dbname,
            self.database.sslmode,
            self.database.max_connections
        );
        info!(
            "  logging: {} ({}, colored: {})",
            *self.logging.level,
            self.logging.file.as_deref().unwrap_or("stdout"),
            self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("US_SERVER_HOST", &mut self.server.host);
        Self::apply_env_string("US_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("US_DATABASE_HOST", &mut self.database.host);
        Self::apply_env_parse("US_DATABASE_PORT", &mut self.database.port);
        Self::apply_env_string("US_DATABASE_USER", &mut self.database.user);
        Self::apply_env_string("US_DATABASE_PASSWORD", &mut self.database.password);
        Self::apply_env_string("US_DATABASE_DBNAME", &mut self.database.dbname);
        Self::apply_env_parse("US_DATABASE_SSLMODE", &mut self.database.sslmode);
        Self::apply_env_parse(
            "US_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Logging
        Self::apply_env_parse("US_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_option_string("US_LOG_FILE", &mut self.logging.file);
        Self::apply_env_bool("US_LOG_COLORED", &mut self.logging.colored);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
