mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod ssl_mode;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use ssl_mode::SslMode;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: &str = "8080";
const DEFAULT_DATABASE_HOST: &str = "localhost";
const DEFAULT_DATABASE_PORT: u16 = 5432;
const DEFAULT_DATABASE_USER: &str = "postgres";
const DEFAULT_DATABASE_NAME: &str = "users";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const MIN_MAX_CONNECTIONS: u32 = 1;
const MAX_MAX_CONNECTIONS: u32 = 100;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const CONFIG_EXTENSIONS: [&str; 2] = ["yaml", "yml"];
