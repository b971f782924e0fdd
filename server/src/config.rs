use std::path::PathBuf;
use std::str::FromStr;

use chrono::Duration;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_IMAGE_BASE_URL: &str = "https://storage.googleapis.com/recipesapp-images1";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

/// Runtime configuration, read once at startup.
///
/// Environment variables:
/// - `DATABASE_URL`: SQLite file path (default `recipe_database.sqlite3`)
/// - `BIND_ADDR`: listen address (default `0.0.0.0:8080`)
/// - `FOOD_CSV_PATH` / `ITEM_CSV_PATH`: corpus files (default `Food.csv` / `Item.csv`)
/// - `IMAGE_BASE_URL`: storage prefix for corpus images
/// - `YOUTUBE_API_KEY`: enables `/youtube_tutorial` when set
/// - `SESSION_TTL_MINUTES`: login session lifetime (default 60)
/// - `COOKIE_SECURE`: "true"/"1" adds the `Secure` attribute to the auth cookie
/// - `INSECURE_PASSWORD_HASHING`: any value selects fast argon2 params (dev/test only)
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub food_csv_path: PathBuf,
    pub item_csv_path: PathBuf,
    pub image_base_url: String,
    pub youtube_api_key: Option<String>,
    pub session_ttl: Duration,
    pub secure_cookies: bool,
    pub insecure_password_hashing: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. `from_env` passes the
    /// process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| {
            lookup(key).unwrap_or_else(|| {
                debug!("{key} not set, using default: {default}");
                default.to_string()
            })
        };

        let ttl_minutes: i64 = parse("SESSION_TTL_MINUTES", &var("SESSION_TTL_MINUTES", "60"))?;
        if ttl_minutes <= 0 {
            return Err(ConfigError::Invalid {
                key: "SESSION_TTL_MINUTES",
                message: "must be positive".to_string(),
            });
        }

        Ok(Self {
            database_url: var("DATABASE_URL", "recipe_database.sqlite3"),
            bind_addr: var("BIND_ADDR", "0.0.0.0:8080"),
            food_csv_path: PathBuf::from(var("FOOD_CSV_PATH", "Food.csv")),
            item_csv_path: PathBuf::from(var("ITEM_CSV_PATH", "Item.csv")),
            image_base_url: var("IMAGE_BASE_URL", DEFAULT_IMAGE_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            youtube_api_key: lookup("YOUTUBE_API_KEY").filter(|k| !k.trim().is_empty()),
            session_ttl: Duration::minutes(ttl_minutes),
            secure_cookies: flag(lookup("COOKIE_SECURE")),
            insecure_password_hashing: lookup("INSECURE_PASSWORD_HASHING").is_some(),
        })
    }
}

fn parse<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        message: e.to_string(),
    })
}

fn flag(value: Option<String>) -> bool {
    value
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.database_url, "recipe_database.sqlite3");
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.food_csv_path, PathBuf::from("Food.csv"));
        assert_eq!(config.item_csv_path, PathBuf::from("Item.csv"));
        assert_eq!(config.image_base_url, DEFAULT_IMAGE_BASE_URL);
        assert_eq!(config.youtube_api_key, None);
        assert_eq!(config.session_ttl, Duration::minutes(60));
        assert!(!config.secure_cookies);
        assert!(!config.insecure_password_hashing);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("DATABASE_URL", "/tmp/test.sqlite3"),
            ("IMAGE_BASE_URL", "https://cdn.example.com/images/"),
            ("YOUTUBE_API_KEY", "abc"),
            ("SESSION_TTL_MINUTES", "15"),
            ("COOKIE_SECURE", "1"),
            ("INSECURE_PASSWORD_HASHING", ""),
        ])
        .unwrap();
        assert_eq!(config.database_url, "/tmp/test.sqlite3");
        assert_eq!(config.image_base_url, "https://cdn.example.com/images");
        assert_eq!(config.youtube_api_key.as_deref(), Some("abc"));
        assert_eq!(config.session_ttl, Duration::minutes(15));
        assert!(config.secure_cookies);
        assert!(config.insecure_password_hashing);
    }

    #[test]
    fn test_blank_api_key_is_unset() {
        let config = config_from(&[("YOUTUBE_API_KEY", "  ")]).unwrap();
        assert_eq!(config.youtube_api_key, None);
    }

    #[test]
    fn test_invalid_ttl() {
        let err = config_from(&[("SESSION_TTL_MINUTES", "soon")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                key: "SESSION_TTL_MINUTES",
                ..
            }
        ));

        assert!(config_from(&[("SESSION_TTL_MINUTES", "0")]).is_err());
    }
}
