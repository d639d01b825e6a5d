//! # Movie Trending Engine
//!
//! Movie catalog search with a locally tracked trending list:
//! - TMDB catalog provider
//! - Per-term search counts persisted in a key-value store (SQLite or memory)
//! - Top-N trending ranking over past searches
//! - Best-effort tracking that never fails a search
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use movie_trending_engine::{EngineConfig, MovieEngine};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let engine = MovieEngine::new(&EngineConfig::from_env())?;
//!
//!     let movies = engine.search("batman").await?;
//!     println!("Found {} movies", movies.len());
//!
//!     for (rank, record) in engine.trending(5).iter().enumerate() {
//!         println!("{}. {} ({} searches)", rank + 1, record.search_term, record.count);
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod providers;
pub mod storage;
pub mod tracker;

// Re-export primary types
pub use config::EngineConfig;
pub use core::{Movie, MovieId, SearchRecord};
pub use engine::MovieEngine;
pub use error::{EngineError, Result};
pub use storage::{KeyValueStorage, MemoryStorage, SqliteStorage};
pub use tracker::{SearchCountStore, TrendingStats, DEFAULT_TRENDING_LIMIT};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
