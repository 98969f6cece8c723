// src/config.rs
use rust_decimal::Decimal;
use std::{env, str::FromStr, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    catalog_url: String,
    default_price: Decimal,
    catalog_timeout: Duration,
    allowed_origins: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_catalog_url() -> String {
    "https://flapotest.blob.core.windows.net/test/ProductData.json".into()
}

fn default_price() -> Decimal {
    Decimal::new(1799, 2)
}

fn default_catalog_timeout_secs() -> u64 {
    10
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. `from_env` uses the
    /// process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let catalog_url = lookup("CATALOG_URL").unwrap_or_else(default_catalog_url);
        if !(catalog_url.starts_with("http://") || catalog_url.starts_with("https://")) {
            return Err(ConfigError::Invalid(
                "CATALOG_URL must be an absolute http(s) URL".into(),
            ));
        }

        let default_price = match lookup("DEFAULT_PRICE") {
            Some(raw) => Decimal::from_str(raw.trim())
                .map_err(|_| ConfigError::Invalid(format!("DEFAULT_PRICE is not a decimal: {raw}")))?,
            None => default_price(),
        };

        let timeout_secs = match lookup("CATALOG_TIMEOUT_SECONDS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    ConfigError::Invalid(
                        "CATALOG_TIMEOUT_SECONDS must be a positive integer".into(),
                    )
                })?,
            None => default_catalog_timeout_secs(),
        };

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_else(default_allowed_origins);

        Ok(Self {
            listen_addr,
            catalog_url,
            default_price,
            catalog_timeout: Duration::from_secs(timeout_secs),
            allowed_origins,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn catalog_url(&self) -> &str {
        &self.catalog_url
    }

    pub fn default_price(&self) -> Decimal {
        self.default_price
    }

    pub fn catalog_timeout(&self) -> Duration {
        self.catalog_timeout
    }

    /// Return the allowed CORS origins as configured.
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.listen_addr(), "127.0.0.1:8080");
        assert_eq!(
            config.catalog_url(),
            "https://flapotest.blob.core.windows.net/test/ProductData.json"
        );
        assert_eq!(config.default_price(), Decimal::from_str("17.99").unwrap());
        assert_eq!(config.catalog_timeout(), Duration::from_secs(10));
        assert_eq!(config.allowed_origins(), ["http://localhost:3000".to_string()]);
    }

    #[test]
    fn overrides_are_parsed() {
        let config = config_from(&[
            ("DEFAULT_PRICE", "9.49"),
            ("CATALOG_TIMEOUT_SECONDS", "3"),
            ("ALLOWED_ORIGINS", "http://a.test, http://b.test,"),
        ])
        .unwrap();
        assert_eq!(config.default_price(), Decimal::from_str("9.49").unwrap());
        assert_eq!(config.catalog_timeout(), Duration::from_secs(3));
        assert_eq!(config.allowed_origins().len(), 2);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(config_from(&[("DEFAULT_PRICE", "zehn")]).is_err());
        assert!(config_from(&[("CATALOG_TIMEOUT_SECONDS", "0")]).is_err());
        assert!(config_from(&[("CATALOG_URL", "ftp://example.com/data.json")]).is_err());
    }
}
