use serde::Deserialize;

use crate::error::Result;

pub const DEFAULT_BOOKS_API_URL: &str = "https://www.googleapis.com/books/v1/volumes";

/// Prefix for environment overrides, e.g. `RECOMMENDER_PORT=8080`.
const ENV_PREFIX: &str = "RECOMMENDER";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub books_api_url: String,
}

impl Config {
    /// Load configuration from `.env`, the environment, and built-in defaults.
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();

        let settings = ::config::Config::builder()
            .set_default("host", "127.0.0.1")?
            .set_default("port", 5000)?
            .set_default("books_api_url", DEFAULT_BOOKS_API_URL)?
            .add_source(::config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            books_api_url: DEFAULT_BOOKS_API_URL.to_string(),
        }
    }
}
