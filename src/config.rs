//! Application configuration.

use std::env;

use crate::server::ServerConfig;

/// Name of the environment variable carrying the deployed version.
pub const VERSION_VAR: &str = "VERSION";

/// Where the version string reported by the echo endpoint comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSource {
    /// Read the named environment variable on every call.
    Env(String),
    /// Always report the same value.
    Fixed(String),
}

impl VersionSource {
    /// The version as of now; an unset or non-UTF-8 variable reads as `""`.
    pub fn current(&self) -> String {
        match self {
            VersionSource::Env(var) => env::var(var).unwrap_or_default(),
            VersionSource::Fixed(version) => version.clone(),
        }
    }
}

impl Default for VersionSource {
    fn default() -> Self {
        VersionSource::Env(VERSION_VAR.to_string())
    }
}

/// Everything the server binary needs to start.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub version: VersionSource,
}

impl AppConfig {
    /// The production configuration: port 8081 on all interfaces, version
    /// taken from `VERSION` at request time.
    pub fn from_env() -> Self {
        Self::default()
    }
}
