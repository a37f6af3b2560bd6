use crate::{ConfigError, ConfigErrorResult, DEFAULT_HOST, DEFAULT_PORT};

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    /// Listen port, kept as text; "0" lets the OS pick one
    #[serde(deserialize_with = "string_or_number")]
    pub port: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: String::from(DEFAULT_PORT),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::server("server.host cannot be empty"));
        }

        self.port_number()?;

        Ok(())
    }

    /// Parsed listen port
    pub fn port_number(&self) -> ConfigErrorResult<u16> {
        self.port.trim().parse::<u16>().map_err(|e| {
            ConfigError::server(format!(
                "server.port must be a number between 0 and 65535, got '{}': {}",
                self.port, e
            ))
        })
    }

    /// Bind address as `host:port`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port.trim())
    }
}

/// YAML users write `port: 8080` as often as `port: "8080"`
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPort {
        Number(u64),
        Text(String),
    }

    Ok(match RawPort::deserialize(deserializer)? {
        RawPort::Number(n) => n.to_string(),
        RawPort::Text(s) => s,
    })
}
