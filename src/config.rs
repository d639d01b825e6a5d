//! Engine configuration, read from environment variables.
//!
//! | Variable               | Default                              |
//! |------------------------|--------------------------------------|
//! | `TMDB_API_KEY`         | empty                                |
//! | `TMDB_API_BASE_URL`    | `https://api.themoviedb.org/3`       |
//! | `TMDB_IMAGE_BASE_URL`  | `https://image.tmdb.org/t/p/w500`    |
//! | `DB_PATH`              | `movies.db`                          |
//! | `TRENDING_STORAGE_KEY` | `movie_searches`                     |
//! | `TRENDING_LIMIT`       | `5`                                  |
//! | `HTTP_TIMEOUT_SECS`    | `10`                                 |

use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{EngineError, Result};
use crate::tracker::DEFAULT_TRENDING_LIMIT;

pub const DEFAULT_API_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";
pub const DEFAULT_DB_PATH: &str = "movies.db";
pub const DEFAULT_STORAGE_KEY: &str = "movie_searches";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

const ENV_KEYS: [&str; 7] = [
    "TMDB_API_KEY",
    "TMDB_API_BASE_URL",
    "TMDB_IMAGE_BASE_URL",
    "DB_PATH",
    "TRENDING_STORAGE_KEY",
    "TRENDING_LIMIT",
    "HTTP_TIMEOUT_SECS",
];

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub api_key: String,
    pub api_base_url: String,
    /// Prefix joined with a movie's poster path to build `posterUrl`
    pub image_base_url: String,
    pub db_path: String,
    pub storage_key: String,
    pub trending_limit: usize,
    pub http_timeout: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            db_path: DEFAULT_DB_PATH.to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            trending_limit: DEFAULT_TRENDING_LIMIT,
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl EngineConfig {
    /// Build config from the process environment
    pub fn from_env() -> Self {
        let vars: HashMap<String, String> = ENV_KEYS
            .iter()
            .filter_map(|key| std::env::var(key).ok().map(|v| (key.to_string(), v)))
            .collect();

        Self::from_map(&vars)
    }

    /// Build config from a key/value map, falling back to defaults
    pub fn from_map(vars: &HashMap<String, String>) -> Self {
        let defaults = Self::default();
        let text = |key: &str, default: String| {
            vars.get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .unwrap_or(default)
        };

        Self {
            api_key: text("TMDB_API_KEY", defaults.api_key),
            api_base_url: text("TMDB_API_BASE_URL", defaults.api_base_url)
                .trim_end_matches('/')
                .to_string(),
            image_base_url: text("TMDB_IMAGE_BASE_URL", defaults.image_base_url)
                .trim_end_matches('/')
                .to_string(),
            db_path: text("DB_PATH", defaults.db_path),
            storage_key: text("TRENDING_STORAGE_KEY", defaults.storage_key),
            trending_limit: parse_or(vars, "TRENDING_LIMIT", defaults.trending_limit),
            http_timeout: Duration::from_secs(parse_or(
                vars,
                "HTTP_TIMEOUT_SECS",
                DEFAULT_HTTP_TIMEOUT_SECS,
            )),
        }
    }

    /// Reject settings the engine cannot run with
    pub fn validate(&self) -> Result<()> {
        for (name, url) in [
            ("TMDB_API_BASE_URL", &self.api_base_url),
            ("TMDB_IMAGE_BASE_URL", &self.image_base_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(EngineError::Config(format!("{} must be an http(s) URL, got {:?}", name, url)));
            }
        }

        if self.storage_key.trim().is_empty() {
            return Err(EngineError::Config("TRENDING_STORAGE_KEY must not be empty".to_string()));
        }

        if self.db_path.trim().is_empty() {
            return Err(EngineError::Config("DB_PATH must not be empty".to_string()));
        }

        Ok(())
    }
}

fn parse_or<T: FromStr + Copy>(vars: &HashMap<String, String>, key: &str, default: T) -> T {
    match vars.get(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid {}={:?}, using default", key, raw);
            default
        }),
    }
}
