use serde::{Deserialize, Serialize};

use crate::core::{Movie, MovieId};

/// One tracked search term and the movie it last resolved to.
///
/// Serialized with camelCase keys so the persisted blob reads:
/// ```json
/// { "searchTerm": "batman", "count": 1, "movieId": 42, "posterUrl": "https://..." }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecord {
    /// Term exactly as typed, no normalization
    pub search_term: String,

    /// Successful, non-empty searches for this term
    pub count: u64,

    /// First result of the most recent successful search
    pub movie_id: MovieId,

    pub poster_url: String,
}

impl SearchRecord {
    /// First occurrence of `term`
    pub fn new(term: impl Into<String>, movie: &Movie, image_base_url: &str) -> Self {
        Self {
            search_term: term.into(),
            count: 1,
            movie_id: movie.id.clone(),
            poster_url: movie.poster_url(image_base_url),
        }
    }

    /// Count another hit and point the record at the latest match
    pub fn register_match(&mut self, movie: &Movie, image_base_url: &str) {
        self.count = self.count.saturating_add(1);
        self.movie_id = movie.id.clone();
        self.poster_url = movie.poster_url(image_base_url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://image.tmdb.org/t/p/w500";

    #[test]
    fn test_persisted_shape() {
        let movie = Movie::new(42, "Batman").with_poster("/x.jpg");
        let record = SearchRecord::new("batman", &movie, BASE);

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "searchTerm": "batman",
                "count": 1,
                "movieId": 42,
                "posterUrl": "https://image.tmdb.org/t/p/w500/x.jpg"
            })
        );
    }

    #[test]
    fn test_register_match_overwrites_movie() {
        let first = Movie::new(1, "Batman").with_poster("/a.jpg");
        let second = Movie::new(2, "The Batman").with_poster("/b.jpg");

        let mut record = SearchRecord::new("batman", &first, BASE);
        record.register_match(&second, BASE);

        assert_eq!(record.count, 2);
        assert_eq!(record.movie_id, MovieId::from(2));
        assert_eq!(record.poster_url, format!("{}/b.jpg", BASE));
    }

    #[test]
    fn test_string_movie_id_blob() {
        let json = r#"{"searchTerm":"dune","count":3,"movieId":"438631","posterUrl":""}"#;
        let record: SearchRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.movie_id, MovieId::Text("438631".to_string()));
        assert_eq!(record.count, 3);
    }
}
