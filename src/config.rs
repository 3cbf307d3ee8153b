use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::ConfigError;

/// Default OpenAI-compatible API root.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Process configuration, resolved once at startup.
///
/// | Env Var           | Default                     |
/// |-------------------|-----------------------------|
/// | `OPENAI_API_KEY`  | required                    |
/// | `OPENAI_BASE_URL` | `https://api.openai.com/v1` |
/// | `HOST`            | `0.0.0.0`                   |
/// | `PORT`            | `3000`                      |
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub host: IpAddr,
    pub port: u16,
}

impl Config {
    /// Load from the process environment. Call `dotenvy::dotenv()` first if a
    /// `.env` file should be honored.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through an arbitrary key lookup.
    ///
    /// The API key is checked first: without it nothing else matters.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("OPENAI_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let base_url = lookup("OPENAI_BASE_URL")
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        // Unparseable hosts fall back to all interfaces.
        let host = lookup("HOST")
            .and_then(|h| h.trim().parse().ok())
            .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));

        let port: u16 = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => 3000,
        };

        Ok(Self {
            api_key,
            base_url,
            host,
            port,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn missing_api_key_is_fatal() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "8080")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
    }

    #[test]
    fn blank_api_key_counts_as_missing() {
        let err = Config::from_lookup(lookup_from(&[("OPENAI_API_KEY", "   ")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let config = Config::from_lookup(lookup_from(&[("OPENAI_API_KEY", "sk-test")])).unwrap();
        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.addr(), "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn overrides_are_honored() {
        let config = Config::from_lookup(lookup_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_BASE_URL", "http://127.0.0.1:9999/v1/"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8501"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:9999/v1");
        assert_eq!(config.addr(), "127.0.0.1:8501".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn bad_port_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("PORT", "eighty"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(p) if p == "eighty"));
    }

    #[test]
    fn debug_output_hides_the_key() {
        let config = Config::from_lookup(lookup_from(&[("OPENAI_API_KEY", "sk-secret")])).unwrap();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("sk-secret"));
    }
}
