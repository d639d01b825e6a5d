use crate::config::EngineConfig;
use crate::core::{Movie, SearchRecord};
use crate::error::Result;
use crate::providers::{MovieProvider, TmdbProvider};
use crate::storage::{KeyValueStorage, SqliteStorage};
use crate::tracker::{SearchCountStore, TrendingStats};
use std::sync::Arc;
use std::time::Instant;

/// Movie search orchestrator: catalog lookups plus search tracking
pub struct MovieEngine {
    provider: Arc<dyn MovieProvider>,
    tracker: SearchCountStore,
}

impl MovieEngine {
    /// Create engine with TMDB and a SQLite-backed tracker at `config.db_path`
    pub fn new(config: &EngineConfig) -> Result<Self> {
        config.validate()?;

        let storage = Arc::new(SqliteStorage::open(&config.db_path)?);
        let provider = Arc::new(TmdbProvider::new(config)?);

        Ok(Self::with_parts(provider, storage, config))
    }

    pub fn with_parts(
        provider: Arc<dyn MovieProvider>,
        storage: Arc<dyn KeyValueStorage>,
        config: &EngineConfig,
    ) -> Self {
        let tracker = SearchCountStore::with_settings(
            storage,
            config.storage_key.clone(),
            config.image_base_url.clone(),
        );

        Self { provider, tracker }
    }

    /// Search the catalog, counting the query when it found something
    pub async fn search(&self, query: &str) -> Result<Vec<Movie>> {
        let start = Instant::now();

        let movies = self.provider.search(query).await.map_err(|e| {
            tracing::warn!("Provider {} failed: {}", self.provider.name(), e);
            e
        })?;

        if let Some(first) = movies.first().filter(|_| !query.is_empty()) {
            self.tracker.record_search(query, first);
        }

        tracing::info!(
            "'{}' -> {} movies ({:.1}ms)",
            query,
            movies.len(),
            start.elapsed().as_secs_f64() * 1000.0
        );

        Ok(movies)
    }

    /// Most searched terms, highest count first
    pub fn trending(&self, limit: usize) -> Vec<SearchRecord> {
        self.tracker.top_trending(limit)
    }

    pub fn stats(&self) -> TrendingStats {
        self.tracker.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MovieId;
    use crate::error::EngineError;
    use crate::storage::MemoryStorage;
    use async_trait::async_trait;

    /// Returns canned results, or fails for the query "error"
    struct StaticProvider {
        movies: Vec<Movie>,
    }

    #[async_trait]
    impl MovieProvider for StaticProvider {
        async fn search(&self, query: &str) -> Result<Vec<Movie>> {
            match query {
                "error" => Err(EngineError::Provider {
                    provider: "static".to_string(),
                    message: "HTTP 500".to_string(),
                }),
                "nothing" => Ok(Vec::new()),
                _ => Ok(self.movies.clone()),
            }
        }

        fn name(&self) -> &str {
            "static"
        }
    }

    fn engine() -> MovieEngine {
        let provider = Arc::new(StaticProvider {
            movies: vec![
                Movie::new(268, "Batman").with_poster("/batman.jpg"),
                Movie::new(364, "Batman Returns"),
            ],
        });
        MovieEngine::with_parts(provider, Arc::new(MemoryStorage::new()), &EngineConfig::default())
    }

    #[tokio::test]
    async fn test_engine_creation() {
        let config = EngineConfig {
            db_path: ":memory:".to_string(),
            ..EngineConfig::default()
        };
        assert!(MovieEngine::new(&config).is_ok());
    }

    #[tokio::test]
    async fn test_engine_rejects_invalid_config() {
        let config = EngineConfig {
            db_path: ":memory:".to_string(),
            storage_key: String::new(),
            ..EngineConfig::default()
        };
        assert!(matches!(MovieEngine::new(&config), Err(EngineError::Config(_))));
    }

    #[tokio::test]
    async fn test_search_records_first_result() {
        let engine = engine();

        let movies = engine.search("batman").await.unwrap();
        assert_eq!(movies.len(), 2);

        let trending = engine.trending(5);
        assert_eq!(trending.len(), 1);
        assert_eq!(trending[0].movie_id, MovieId::from(268));
        assert_eq!(trending[0].poster_url, "https://image.tmdb.org/t/p/w500/batman.jpg");
    }

    #[tokio::test]
    async fn test_empty_query_not_recorded() {
        let engine = engine();

        let movies = engine.search("").await.unwrap();
        assert!(!movies.is_empty());
        assert!(engine.trending(5).is_empty());
    }

    #[tokio::test]
    async fn test_empty_results_not_recorded() {
        let engine = engine();

        assert!(engine.search("nothing").await.unwrap().is_empty());
        assert!(engine.trending(5).is_empty());
    }

    #[tokio::test]
    async fn test_provider_error_propagates() {
        let engine = engine();

        let err = engine.search("error").await.unwrap_err();
        assert!(matches!(err, EngineError::Provider { .. }));
        assert_eq!(engine.stats().total_terms, 0);
    }
}
