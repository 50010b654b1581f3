use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

/// Server settings read from the environment (and `.env`).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub google_map_api_key: String,
    pub geocode_language: String,
    pub production: bool,
    pub log_level: log::LevelFilter,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let log_level = match lookup("LOG_LEVEL") {
            Some(value) => {
                log::LevelFilter::from_str(&value).map_err(|_| ConfigError::Invalid {
                    key: "LOG_LEVEL",
                    value,
                })?
            }
            None => log::LevelFilter::Info,
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| "sqlite:roomstay.db".into()),
            google_map_api_key: lookup("GOOGLE_MAP_API_KEY").unwrap_or_default(),
            geocode_language: lookup("GEOCODE_LANGUAGE").unwrap_or_else(|| "en".into()),
            production: lookup("PRODUCTION").is_some(),
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.database_url, "sqlite:roomstay.db");
        assert_eq!(config.geocode_language, "en");
        assert!(config.google_map_api_key.is_empty());
        assert!(!config.production);
        assert_eq!(config.log_level, log::LevelFilter::Info);
    }

    #[test]
    fn reads_values() {
        let config = config(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("GOOGLE_MAP_API_KEY", "key"),
            ("GEOCODE_LANGUAGE", "ko"),
            ("PRODUCTION", "1"),
            ("LOG_LEVEL", "debug"),
        ])
        .unwrap();
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.google_map_api_key, "key");
        assert_eq!(config.geocode_language, "ko");
        assert!(config.production);
        assert_eq!(config.log_level, log::LevelFilter::Debug);
    }

    #[test]
    fn bad_log_level() {
        let err = config(&[("LOG_LEVEL", "loud")]).unwrap_err();
        assert_eq!(err.to_string(), "invalid value \"loud\" for LOG_LEVEL");
    }
}
