use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalog identifier of a movie (TMDB uses numbers, stored blobs may carry strings)
///
/// Any JSON number is accepted, including negatives and floats.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MovieId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MovieId::Number(n) => write!(f, "{}", n),
            MovieId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for MovieId {
    fn from(id: u64) -> Self {
        MovieId::Number(id.into())
    }
}

impl From<&str> for MovieId {
    fn from(id: &str) -> Self {
        MovieId::Text(id.to_string())
    }
}

impl From<String> for MovieId {
    fn from(id: String) -> Self {
        MovieId::Text(id)
    }
}

/// Deserialize release date, TMDB sends "" when unknown
fn deserialize_release_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Some)
            .map_err(|_| Error::custom(format!("Invalid release date: {}", s))),
    }
}

/// A movie as returned by the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    /// Catalog ID
    pub id: MovieId,

    /// Display title
    #[serde(default)]
    pub title: String,

    /// Poster path relative to the image CDN (e.g. "/x.jpg")
    #[serde(default)]
    pub poster_path: Option<String>,

    #[serde(default, deserialize_with = "deserialize_release_date")]
    pub release_date: Option<NaiveDate>,

    /// Average user vote (0.0-10.0)
    #[serde(default)]
    pub vote_average: Option<f64>,

    #[serde(default)]
    pub original_language: Option<String>,

    #[serde(default)]
    pub overview: String,
}

impl Movie {
    /// Create a new Movie with required fields
    pub fn new(id: impl Into<MovieId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            poster_path: None,
            release_date: None,
            vote_average: None,
            original_language: None,
            overview: String::new(),
        }
    }

    pub fn with_poster(mut self, poster_path: impl Into<String>) -> Self {
        self.poster_path = Some(poster_path.into());
        self
    }

    /// Release year, if the date is known
    pub fn year(&self) -> Option<i32> {
        self.release_date.map(|d| d.year())
    }

    /// Full poster URL under `image_base_url`, empty when the movie has no poster
    pub fn poster_url(&self, image_base_url: &str) -> String {
        match &self.poster_path {
            Some(path) if !path.is_empty() => format!("{}{}", image_base_url, path),
            _ => String::new(),
        }
    }

    /// Get display name (for logging/UI)
    pub fn display_name(&self) -> String {
        if let Some(year) = self.year() {
            format!("{} ({})", self.title, year)
        } else {
            self.title.clone()
        }
    }
}
