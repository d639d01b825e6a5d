use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::config::EngineConfig;
use crate::core::Movie;
use crate::error::{EngineError, Result};
use crate::providers::MovieProvider;

/// The Movie Database (TMDB) v3 provider
pub struct TmdbProvider {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct TmdbPage {
    #[serde(default)]
    results: Vec<Movie>,
}

impl TmdbProvider {
    /// Create new TMDB provider
    pub fn new(config: &EngineConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.http_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Search endpoint for a query, popularity listing when empty
    fn endpoint(&self, query: &str) -> String {
        if query.is_empty() {
            format!(
                "{}/discover/movie?sort_by=popularity.desc&api_key={}",
                self.base_url, self.api_key
            )
        } else {
            format!(
                "{}/search/movie?query={}&api_key={}",
                self.base_url,
                urlencoding::encode(query),
                self.api_key
            )
        }
    }

    fn provider_error(message: String) -> EngineError {
        EngineError::Provider {
            provider: "tmdb".to_string(),
            message,
        }
    }
}

#[async_trait]
impl MovieProvider for TmdbProvider {
    async fn search(&self, query: &str) -> Result<Vec<Movie>> {
        let url = self.endpoint(query);
        tracing::debug!("Endpoint: {}", redact_key(&url));

        let response = self.client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| Self::provider_error(format!("Search request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Self::provider_error(format!("HTTP {}", response.status())));
        }

        let page: TmdbPage = response
            .json()
            .await
            .map_err(|e| Self::provider_error(format!("Invalid JSON: {}", e)))?;

        tracing::debug!("TMDB returned {} movies for '{}'", page.results.len(), query);

        Ok(page.results)
    }

    fn name(&self) -> &str {
        "tmdb"
    }
}

/// Hide the API key when logging URLs
fn redact_key(url: &str) -> String {
    match url.find("api_key=") {
        Some(idx) => format!("{}api_key=***", &url[..idx]),
        None => url.to_string(),
    }
}
