//! Environment configuration
//!
//! Values are read from the process environment. Binaries call
//! `dotenvy::dotenv()` before [`PlatformConfig::from_env`] so a local `.env`
//! file is honoured.

use std::env;
use std::str::FromStr;

use thiserror::Error;

pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_LOG_FILTER: &str = "info,sqlx=warn";
pub const OWNER_IDENTITY_VALUES: [&str; 2] = ["user", "profile"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformConfig {
    pub database: DatabaseConfig,
    /// Default `EnvFilter` directive used when `RUST_LOG` is unset
    pub log_filter: String,
    /// `COMMUNITY_OWNER_IDENTITY`, lowercased and checked against
    /// [`OWNER_IDENTITY_VALUES`]; interpreted by the communities context
    pub owner_identity: Option<String>,
}

impl PlatformConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let max_connections = parse_or(
            &lookup,
            "DATABASE_MAX_CONNECTIONS",
            DEFAULT_MAX_CONNECTIONS,
        )?;
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "DATABASE_MAX_CONNECTIONS",
                value: "0".to_string(),
            });
        }

        Ok(Self {
            database: DatabaseConfig {
                url,
                max_connections,
            },
            log_filter: lookup("LOG_FILTER").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            owner_identity: owner_identity(&lookup)?,
        })
    }
}

fn owner_identity<F>(lookup: &F) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup("COMMUNITY_OWNER_IDENTITY") else {
        return Ok(None);
    };
    let normalized = raw.trim().to_lowercase();
    if OWNER_IDENTITY_VALUES.contains(&normalized.as_str()) {
        Ok(Some(normalized))
    } else {
        Err(ConfigError::Invalid {
            key: "COMMUNITY_OWNER_IDENTITY",
            value: raw,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}
