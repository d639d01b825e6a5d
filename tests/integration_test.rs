use async_trait::async_trait;
use movie_trending_engine::{
    providers::MovieProvider, EngineConfig, KeyValueStorage, Movie, MovieEngine, MovieId,
    SearchCountStore, SqliteStorage,
};
use std::sync::Arc;

/// Catalog that resolves every query to a movie whose id depends on the query
struct FakeCatalog;

#[async_trait]
impl MovieProvider for FakeCatalog {
    async fn search(&self, query: &str) -> movie_trending_engine::Result<Vec<Movie>> {
        let id = query.len() as u64;
        Ok(vec![Movie::new(id, query.to_uppercase()).with_poster(format!("/{}.jpg", id))])
    }

    fn name(&self) -> &str {
        "fake"
    }
}

#[test]
fn test_counts_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("trending.db").to_string_lossy().to_string();

    {
        let store = SearchCountStore::new(Arc::new(SqliteStorage::open(&db).unwrap()));
        store.record_search("batman", &Movie::new(42, "Batman").with_poster("/x.jpg"));
        store.record_search("batman", &Movie::new(42, "Batman").with_poster("/x.jpg"));
        store.record_search("dune", &Movie::new(438631, "Dune"));
    }

    let store = SearchCountStore::new(Arc::new(SqliteStorage::open(&db).unwrap()));
    let trending = store.top_trending(5);

    assert_eq!(trending.len(), 2);
    assert_eq!(trending[0].search_term, "batman");
    assert_eq!(trending[0].count, 2);
    assert_eq!(trending[0].movie_id, MovieId::from(42));
    assert_eq!(trending[1].poster_url, "");
}

#[test]
fn test_reads_blob_written_elsewhere() {
    let storage = Arc::new(SqliteStorage::open(":memory:").unwrap());
    storage
        .set(
            "movie_searches",
            r#"[{"searchTerm":"alien","count":2,"movieId":348,"posterUrl":"https://image.tmdb.org/t/p/w500/a.jpg"},
                {"searchTerm":"heat","count":4,"movieId":"949","posterUrl":""}]"#,
        )
        .unwrap();

    let store = SearchCountStore::new(storage);
    let trending = store.top_trending(5);

    assert_eq!(trending[0].search_term, "heat");
    assert_eq!(trending[0].movie_id, MovieId::Text("949".to_string()));
    assert_eq!(trending[1].search_term, "alien");
}

#[test]
fn test_engine_tracks_searches() {
    let storage = Arc::new(SqliteStorage::open(":memory:").unwrap());
    let engine = MovieEngine::with_parts(Arc::new(FakeCatalog), storage, &EngineConfig::default());

    for query in ["heat", "alien", "heat", "", "up", "heat", "alien"] {
        let movies = tokio_test::block_on(engine.search(query)).unwrap();
        assert_eq!(movies.len(), 1);
    }

    let trending = engine.trending(2);
    let got: Vec<_> = trending.iter().map(|r| (r.search_term.as_str(), r.count)).collect();
    assert_eq!(got, vec![("heat", 3), ("alien", 2)]);

    let stats = engine.stats();
    assert_eq!(stats.total_terms, 3);
    assert_eq!(stats.total_searches, 6);
    assert_eq!(stats.top_term.as_deref(), Some("heat"));
}

#[tokio::test]
#[ignore] // Requires network access and TMDB_API_KEY
async fn test_tmdb_engine_integration() {
    let config = EngineConfig {
        db_path: ":memory:".to_string(),
        ..EngineConfig::from_env()
    };
    let engine = MovieEngine::new(&config).unwrap();

    let movies = engine.search("batman").await.unwrap();
    assert!(!movies.is_empty());

    let trending = engine.trending(5);
    assert_eq!(trending.len(), 1);
    assert_eq!(trending[0].movie_id, movies[0].id);
}
