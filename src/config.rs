//! Server configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! Variables are read once at startup. Parsing goes through a lookup
//! closure so tests can supply values without touching the process
//! environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// JSON fixture with the workspaces to serve; built-in demo data when absent.
    pub seed_path: Option<PathBuf>,
    /// Whether the caller may move workspaces to another template version.
    pub can_change_versions: bool,
}

impl Config {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `WSPARAMS_SEED`: path to a JSON array of workspace records
    /// - `WSPARAMS_CAN_CHANGE_VERSIONS`: `true`/`false`, default `false`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` when a variable is set but unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with an explicit variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` when a variable is set but unparsable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match non_empty(lookup("PORT")) {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        let bind_addr = match non_empty(lookup("BIND_ADDR")) {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid { var: "BIND_ADDR", value: raw })?,
            None => DEFAULT_BIND_ADDR,
        };
        let seed_path = non_empty(lookup("WSPARAMS_SEED")).map(PathBuf::from);
        let can_change_versions = match non_empty(lookup("WSPARAMS_CAN_CHANGE_VERSIONS")) {
            Some(raw) => parse_bool(&raw)
                .ok_or(ConfigError::Invalid { var: "WSPARAMS_CAN_CHANGE_VERSIONS", value: raw })?,
            None => false,
        };

        Ok(Self { bind_addr, port, seed_path, can_change_versions })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
