//! Server configuration parsed from environment variables.

use identity::toolkit::{ConfigError as ToolkitConfigError, ToolkitConfig};

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Identity(#[from] ToolkitConfigError),
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub cors_allow_any: bool,
    pub identity: ToolkitConfig,
}

impl ServerConfig {
    /// Build from environment variables.
    ///
    /// - `PORT`: default 3000
    /// - `CORS_ALLOW_ANY`: bool, default true
    /// - `IDENTITY_*`: see [`ToolkitConfig::from_env`]
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is not a valid port or the identity
    /// settings are incomplete.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };
        let cors_allow_any = get("CORS_ALLOW_ANY")
            .as_deref()
            .and_then(parse_bool)
            .unwrap_or(true);
        let identity = ToolkitConfig::from_lookup(&get)?;
        Ok(Self { port, cors_allow_any, identity })
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
