use std::env;
use std::fmt::Display;
use std::net::SocketAddr;
use std::str::FromStr;

use thiserror::Error;
use tracing::info;

pub const DEFAULT_DATABASE_PATH: &str = "/data/app.db";
pub const DEFAULT_INSTANCE_NAME: &str = "unknown-pod";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_HEAVY_ITERATIONS: u64 = 20_000_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Startup configuration, built once and shared with every handler.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: String,
    /// Shown in responses so callers can tell which replica answered.
    pub instance_name: String,
    pub port: u16,
    pub heavy_iterations: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            database_path: get("DATABASE_PATH").unwrap_or_else(|| {
                info!("DATABASE_PATH not set, using default: {DEFAULT_DATABASE_PATH}");
                DEFAULT_DATABASE_PATH.to_string()
            }),
            instance_name: get("HOSTNAME").unwrap_or_else(|| DEFAULT_INSTANCE_NAME.to_string()),
            port: parse_or("PORT", get("PORT"), DEFAULT_PORT)?,
            heavy_iterations: parse_or(
                "HEAVY_ITERATIONS",
                get("HEAVY_ITERATIONS"),
                DEFAULT_HEAVY_ITERATIONS,
            )?,
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr + Display,
    T::Err: Display,
{
    match raw {
        None => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: e.to_string(),
            value,
        }),
    }
}
