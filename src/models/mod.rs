use serde::{Deserialize, Serialize};

use crate::services::recommendations::NOT_FOUND_MESSAGE;

pub mod movie;

pub use movie::{CatalogEntry, RecommendedMovie, SimilarMovie};

/// Outcome of a similarity lookup
#[derive(Debug, Clone, PartialEq)]
pub enum Recommendation {
    /// The title is not in the catalog
    NotFound,
    /// Ranked neighbours, at most `RECOMMENDATION_COUNT` of them
    Similar(Vec<SimilarMovie>),
}

impl Recommendation {
    /// Titles in rank order; the fixed not-found message when nothing matched
    pub fn names(&self) -> Vec<String> {
        match self {
            Recommendation::NotFound => vec![NOT_FOUND_MESSAGE.to_string()],
            Recommendation::Similar(movies) => movies.iter().map(|m| m.title.clone()).collect(),
        }
    }

    /// TMDB ids aligned with `names`; empty when nothing matched
    pub fn movie_ids(&self) -> Vec<u64> {
        match self {
            Recommendation::NotFound => Vec::new(),
            Recommendation::Similar(movies) => movies.iter().map(|m| m.movie_id).collect(),
        }
    }
}

/// Response body for GET /api/v1/recommendations
#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub title: String,
    pub recommendations: Vec<RecommendedMovie>,
}

// ============================================================================
// TMDB API Types
// ============================================================================

/// The part of TMDB's GET /3/movie/{id} response we read
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovieDetails {
    #[serde(default)]
    pub poster_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn similar(index: usize, movie_id: u64, title: &str) -> SimilarMovie {
        SimilarMovie {
            index,
            movie_id,
            title: title.to_string(),
            score: 0.5,
        }
    }

    #[test]
    fn test_not_found_names_and_ids() {
        let outcome = Recommendation::NotFound;
        assert_eq!(outcome.names(), vec!["Movie not found in database.".to_string()]);
        assert!(outcome.movie_ids().is_empty());
    }

    #[test]
    fn test_similar_names_and_ids_are_aligned() {
        let outcome = Recommendation::Similar(vec![
            similar(4, 155, "The Dark Knight"),
            similar(9, 272, "Batman Begins"),
        ]);
        assert_eq!(outcome.names(), vec!["The Dark Knight", "Batman Begins"]);
        assert_eq!(outcome.movie_ids(), vec![155, 272]);
    }

    #[test]
    fn test_tmdb_details_deserialization() {
        let json = r#"{
            "id": 19995,
            "title": "Avatar",
            "poster_path": "/kyeqWdyUXW608qlYkRqosgbbJyK.jpg",
            "vote_average": 7.2
        }"#;

        let details: TmdbMovieDetails = serde_json::from_str(json).unwrap();
        assert_eq!(
            details.poster_path,
            Some("/kyeqWdyUXW608qlYkRqosgbbJyK.jpg".to_string())
        );
    }

    #[test]
    fn test_tmdb_details_without_poster() {
        let details: TmdbMovieDetails = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(details.poster_path, None);

        let details: TmdbMovieDetails =
            serde_json::from_str(r#"{"id": 1, "poster_path": null}"#).unwrap();
        assert_eq!(details.poster_path, None);
    }
}
