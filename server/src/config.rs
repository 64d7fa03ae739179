//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
    #[error("AUTH_API_ORIGIN must start with http:// or https://, got {0:?}")]
    InvalidOrigin(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Origin of the authentication API, without a trailing slash.
    pub auth_api_origin: Option<String>,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `AUTH_API_ORIGIN`: upstream for `/auth/*`; unset or empty disables forwarding
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = std::env::var("PORT").ok();
        let origin = std::env::var("AUTH_API_ORIGIN").ok();
        Self::from_vars(port.as_deref(), origin.as_deref())
    }

    fn from_vars(port: Option<&str>, origin: Option<&str>) -> Result<Self, ConfigError> {
        let port = match port.map(str::trim) {
            None | Some("") => DEFAULT_PORT,
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw.to_owned()))?,
        };
        let auth_api_origin = origin.map(parse_origin).transpose()?.flatten();
        Ok(Self { port, auth_api_origin })
    }
}

fn parse_origin(raw: &str) -> Result<Option<String>, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Ok(None);
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidOrigin(raw.to_owned()));
    }
    Ok(Some(trimmed.to_owned()))
}
