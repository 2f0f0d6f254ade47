use crate::error::{HotelError, Result};
use std::path::PathBuf;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://hotel.db?mode=rwc";
pub const DEFAULT_LOG_DIR: &str = "logs";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub database_url: String,
    pub log_dir: PathBuf,
    pub max_connections: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl AppConfig {
    /// Reads `DATABASE_URL`, `HOTEL_LOG_DIR` and `HOTEL_DB_MAX_CONNECTIONS`.
    /// Call `dotenv::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn for_database(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            ..Self::default()
        }
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(url) = lookup("DATABASE_URL").filter(|v| !v.trim().is_empty()) {
            config.database_url = url.trim().to_string();
        }
        if let Some(dir) = lookup("HOTEL_LOG_DIR").filter(|v| !v.trim().is_empty()) {
            config.log_dir = PathBuf::from(dir.trim());
        }
        if let Some(raw) = lookup("HOTEL_DB_MAX_CONNECTIONS") {
            let n = raw.trim().parse::<u32>().map_err(|_| {
                HotelError::Config(format!("HOTEL_DB_MAX_CONNECTIONS is not a number: {}", raw))
            })?;
            if n == 0 {
                return Err(HotelError::Config(
                    "HOTEL_DB_MAX_CONNECTIONS must be at least 1".to_string(),
                ));
            }
            config.max_connections = n;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.database_url, "sqlite://hotel.db?mode=rwc");
    }

    #[test]
    fn env_values_override_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite://other.db?mode=rwc"),
            ("HOTEL_LOG_DIR", "/tmp/hotel-logs"),
            ("HOTEL_DB_MAX_CONNECTIONS", " 2 "),
        ]))
        .unwrap();
        assert_eq!(config.database_url, "sqlite://other.db?mode=rwc");
        assert_eq!(config.log_dir, PathBuf::from("/tmp/hotel-logs"));
        assert_eq!(config.max_connections, 2);
    }

    #[test]
    fn bad_pool_size_is_a_config_error() {
        let err = AppConfig::from_lookup(lookup_from(&[("HOTEL_DB_MAX_CONNECTIONS", "many")]))
            .unwrap_err();
        assert!(matches!(err, HotelError::Config(_)));

        let err = AppConfig::from_lookup(lookup_from(&[("HOTEL_DB_MAX_CONNECTIONS", "0")]))
            .unwrap_err();
        assert!(matches!(err, HotelError::Config(_)));
    }
}
