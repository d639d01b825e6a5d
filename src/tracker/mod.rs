//! Search tracking: per-term popularity counts and the trending ranking.
//!
//! Tracking is best-effort. Every public operation on [`SearchCountStore`]
//! logs and swallows its failures so a broken store never breaks a search;
//! the `try_*` variants expose the underlying [`Result`] for callers and
//! tests that want to see it.

use std::sync::Arc;

use crate::config::{DEFAULT_IMAGE_BASE_URL, DEFAULT_STORAGE_KEY};
use crate::core::{Movie, SearchRecord};
use crate::error::Result;
use crate::storage::KeyValueStorage;

/// Trending list length used when the caller has no preference
pub const DEFAULT_TRENDING_LIMIT: usize = 5;

/// Aggregate figures over the tracked searches
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrendingStats {
    pub total_terms: u64,
    pub total_searches: u64,
    pub top_term: Option<String>,
}

/// Persisted search-term counts, stored as one JSON array under a single key
pub struct SearchCountStore {
    storage: Arc<dyn KeyValueStorage>,
    storage_key: String,
    image_base_url: String,
}

impl SearchCountStore {
    /// Create store with the default key and TMDB image base
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self::with_settings(storage, DEFAULT_STORAGE_KEY, DEFAULT_IMAGE_BASE_URL)
    }

    pub fn with_settings(
        storage: Arc<dyn KeyValueStorage>,
        storage_key: impl Into<String>,
        image_base_url: impl Into<String>,
    ) -> Self {
        Self {
            storage,
            storage_key: storage_key.into(),
            image_base_url: image_base_url.into(),
        }
    }

    /// Count a successful search for `term` that resolved to `movie`.
    ///
    /// Failures are logged and dropped; on failure nothing is persisted.
    pub fn record_search(&self, term: &str, movie: &Movie) {
        if let Err(e) = self.try_record_search(term, movie) {
            tracing::warn!("Failed to update search count for '{}': {}", term, e);
        }
    }

    /// Load, update and rewrite the whole store
    pub fn try_record_search(&self, term: &str, movie: &Movie) -> Result<()> {
        let mut records = self.load()?;

        match records.iter_mut().find(|r| r.search_term == term) {
            Some(record) => {
                record.register_match(movie, &self.image_base_url);
                tracing::debug!("'{}' searched {} times, now -> {}", term, record.count, movie.id);
            }
            None => {
                records.push(SearchRecord::new(term, movie, &self.image_base_url));
                tracing::debug!("First search for '{}' -> {}", term, movie.id);
            }
        }

        self.save(&records)
    }

    /// Up to `limit` records by count, highest first; empty on failure
    pub fn top_trending(&self, limit: usize) -> Vec<SearchRecord> {
        self.try_top_trending(limit).unwrap_or_else(|e| {
            tracing::warn!("Failed to load trending searches: {}", e);
            Vec::new()
        })
    }

    /// Equal counts keep insertion order (the sort is stable)
    pub fn try_top_trending(&self, limit: usize) -> Result<Vec<SearchRecord>> {
        let mut records = rank(self.load()?);
        records.truncate(limit);
        Ok(records)
    }

    pub fn stats(&self) -> TrendingStats {
        self.try_stats().unwrap_or_else(|e| {
            tracing::warn!("Failed to compute trending stats: {}", e);
            TrendingStats::default()
        })
    }

    pub fn try_stats(&self) -> Result<TrendingStats> {
        let records = rank(self.load()?);

        Ok(TrendingStats {
            total_terms: records.len() as u64,
            total_searches: records.iter().fold(0u64, |acc, r| acc.saturating_add(r.count)),
            top_term: records.into_iter().next().map(|r| r.search_term),
        })
    }

    fn load(&self) -> Result<Vec<SearchRecord>> {
        match self.storage.get(&self.storage_key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, records: &[SearchRecord]) -> Result<()> {
        let raw = serde_json::to_string(records)?;
        self.storage.set(&self.storage_key, &raw)
    }
}

/// Sort by count, highest first
fn rank(mut records: Vec<SearchRecord>) -> Vec<SearchRecord> {
    records.sort_by(|a, b| b.count.cmp(&a.count));
    records
}
