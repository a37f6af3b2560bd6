//! PostgreSQL `sslmode` setting.
//!
//! Accepts the libpq mode names, and also a plain boolean where `true`
//! means `require` and `false` means `disable`.

use crate::ConfigError;

use std::fmt;
use std::str::FromStr;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SslMode {
    Disable,
    Allow,
    #[default]
    Prefer,
    Require,
    VerifyCa,
    VerifyFull,
}

impl SslMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SslMode::Disable => "disable",
            SslMode::Allow => "allow",
            SslMode::Prefer => "prefer",
            SslMode::Require => "require",
            SslMode::VerifyCa => "verify-ca",
            SslMode::VerifyFull => "verify-full",
        }
    }
}

impl fmt::Display for SslMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<bool> for SslMode {
    fn from(enabled: bool) -> Self {
        if enabled {
            SslMode::Require
        } else {
            SslMode::Disable
        }
    }
}

impl FromStr for SslMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "disable" | "false" => Ok(SslMode::Disable),
            "allow" => Ok(SslMode::Allow),
            "prefer" => Ok(SslMode::Prefer),
            "require" | "true" => Ok(SslMode::Require),
            "verify-ca" | "verify_ca" => Ok(SslMode::VerifyCa),
            "verify-full" | "verify_full" => Ok(SslMode::VerifyFull),
            other => Err(ConfigError::database(format!(
                "database.sslmode must be one of disable, allow, prefer, require, verify-ca, verify-full; got '{}'",
                other
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for SslMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawSslMode {
            Flag(bool),
            Name(String),
        }

        match RawSslMode::deserialize(deserializer)? {
            RawSslMode::Flag(enabled) => Ok(SslMode::from(enabled)),
            RawSslMode::Name(name) => SslMode::from_str(&name).map_err(D::Error::custom),
        }
    }
}
