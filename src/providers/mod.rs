pub mod tmdb;

use async_trait::async_trait;
use crate::core::Movie;
use crate::error::Result;

pub use tmdb::TmdbProvider;

/// Trait for movie catalog providers
#[async_trait]
pub trait MovieProvider: Send + Sync {
    /// Search movies by query string; an empty query lists popular movies
    async fn search(&self, query: &str) -> Result<Vec<Movie>>;

    /// Get provider name
    fn name(&self) -> &str;
}
