use std::net::SocketAddr;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read .env file: {0}")]
    EnvFile(#[from] dotenv::Error),

    #[error("MONGODB_URL is not set")]
    MissingDatabaseUrl,

    #[error("PORT must be a port number, got {0:?}")]
    InvalidPort(String),
}

/// Process configuration, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub mongodb_url: String,
}

impl Config {
    /// Loads `.env` from the working directory if there is one, then reads
    /// the process environment. Variables already set take precedence over
    /// the file.
    pub fn load() -> Result<Self, ConfigError> {
        match dotenv::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded .env file"),
            Err(e) if e.not_found() => tracing::debug!("no .env file, using process environment"),
            Err(e) => return Err(e.into()),
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let port = match get("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let mongodb_url = get("MONGODB_URL").ok_or(ConfigError::MissingDatabaseUrl)?;

        Ok(Self { port, mongodb_url })
    }

    /// Listens on every interface.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn port_defaults_to_3000() {
        let config = Config::from_lookup(lookup(&[("MONGODB_URL", "mongodb://db:27017")])).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.mongodb_url, "mongodb://db:27017");
    }

    #[test]
    fn empty_port_falls_back_to_default() {
        let config = Config::from_lookup(lookup(&[
            ("PORT", ""),
            ("MONGODB_URL", "mongodb://db:27017"),
        ]))
        .unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn explicit_port_is_used() {
        let config = Config::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("MONGODB_URL", "mongodb://db:27017"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:8080".parse().unwrap());
    }

    #[test]
    fn missing_database_url_is_an_error() {
        let err = Config::from_lookup(lookup(&[("PORT", "8080")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingDatabaseUrl));

        let err = Config::from_lookup(lookup(&[("MONGODB_URL", "")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingDatabaseUrl));
    }

    #[test]
    fn invalid_port_is_an_error() {
        let err = Config::from_lookup(lookup(&[
            ("PORT", "http"),
            ("MONGODB_URL", "mongodb://db:27017"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(ref raw) if raw == "http"));
    }
}
