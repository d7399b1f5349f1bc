use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

use crate::common::pagination::{PageDefaults, DEFAULT_PAGE_SIZE};

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub default_page_size: u32,
    /// Empty means any origin is allowed.
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port: parse_var("PORT", 8080).context("PORT must be a valid number")?,
            db_max_connections: parse_var("DB_MAX_CONNECTIONS", 10)
                .context("DB_MAX_CONNECTIONS must be a valid number")?,
            default_page_size: parse_var("DEFAULT_PAGE_SIZE", DEFAULT_PAGE_SIZE)
                .context("DEFAULT_PAGE_SIZE must be a valid number")?,
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .map(|v| parse_origins(&v))
                .unwrap_or_default(),
        })
    }

    pub fn page_defaults(&self) -> PageDefaults {
        PageDefaults::new(self.default_page_size)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => Ok(raw.trim().parse()?),
        Err(_) => Ok(default),
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_split_and_trimmed() {
        assert_eq!(
            parse_origins(" https://a.test, ,https://b.test "),
            vec!["https://a.test".to_string(), "https://b.test".to_string()]
        );
        assert!(parse_origins("").is_empty());
    }

    #[test]
    fn missing_variable_falls_back_to_default() {
        let port: u16 = parse_var("MARKETPLACE_TEST_UNSET_VARIABLE", 9000).unwrap();
        assert_eq!(port, 9000);
    }
}
