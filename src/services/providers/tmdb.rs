//! TMDB (The Movie Database) poster provider
//!
//! One GET /3/movie/{id} per lookup, no caching and no retry. Every request
//! is bounded by the client timeout.
use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::TmdbMovieDetails,
    services::providers::PosterProvider,
};
use reqwest::Client as HttpClient;
use std::time::Duration;

/// Image shown when no poster can be resolved
pub const PLACEHOLDER_POSTER_URL: &str = "https://via.placeholder.com/500x750?text=No+Image";

const RESPONSE_LANGUAGE: &str = "en-US";

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    image_base_url: String,
}

impl TmdbProvider {
    pub fn new(
        api_key: String,
        api_url: String,
        image_base_url: String,
        timeout: Duration,
    ) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
            image_base_url: image_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        Self::new(
            config.tmdb_api_key.clone(),
            config.tmdb_api_url.clone(),
            config.image_base_url.clone(),
            Duration::from_secs(config.poster_timeout_secs),
        )
    }

    /// Fetches the movie details and returns its poster path, if any
    async fn lookup_poster_path(&self, movie_id: u64) -> AppResult<Option<String>> {
        let url = format!("{}/3/movie/{}", self.api_url, movie_id);

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("language", RESPONSE_LANGUAGE),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApi(format!(
                "TMDB API returned status {}",
                response.status()
            )));
        }

        let details: TmdbMovieDetails = response.json().await?;

        Ok(details
            .poster_path
            .filter(|path| !path.trim().is_empty()))
    }

    /// Joins a poster path onto the image base URL with exactly one separator
    fn poster_url(&self, poster_path: &str) -> String {
        format!(
            "{}/{}",
            self.image_base_url,
            poster_path.trim_start_matches('/')
        )
    }
}

#[async_trait::async_trait]
impl PosterProvider for TmdbProvider {
    async fn fetch_poster(&self, movie_id: u64) -> String {
        match self.lookup_poster_path(movie_id).await {
            Ok(Some(path)) => {
                tracing::debug!(movie_id, provider = self.name(), "Poster resolved");
                self.poster_url(&path)
            }
            Ok(None) => {
                tracing::debug!(
                    movie_id,
                    provider = self.name(),
                    "No poster path in response, using placeholder"
                );
                PLACEHOLDER_POSTER_URL.to_string()
            }
            Err(e) => {
                tracing::warn!(
                    movie_id,
                    error = %e,
                    provider = self.name(),
                    "Poster lookup failed, using placeholder"
                );
                PLACEHOLDER_POSTER_URL.to_string()
            }
        }
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_provider(image_base_url: &str) -> TmdbProvider {
        TmdbProvider::new(
            "test_key".to_string(),
            "http://test.local/".to_string(),
            image_base_url.to_string(),
            Duration::from_secs(1),
        )
        .unwrap()
    }

    #[test]
    fn test_poster_url_with_leading_slash() {
        let provider = create_test_provider("https://image.tmdb.org/t/p/w500");
        assert_eq!(
            provider.poster_url("/kyeqWdyUXW608qlYkRqosgbbJyK.jpg"),
            "https://image.tmdb.org/t/p/w500/kyeqWdyUXW608qlYkRqosgbbJyK.jpg"
        );
    }

    #[test]
    fn test_poster_url_without_leading_slash() {
        let provider = create_test_provider("https://image.tmdb.org/t/p/w500/");
        assert_eq!(
            provider.poster_url("abc.jpg"),
            "https://image.tmdb.org/t/p/w500/abc.jpg"
        );
    }

    #[test]
    fn test_api_url_trailing_slash_trimmed() {
        let provider = create_test_provider("https://image.tmdb.org/t/p/w500");
        assert_eq!(provider.api_url, "http://test.local");
    }

    #[tokio::test]
    async fn test_unreachable_host_falls_back_to_placeholder() {
        let provider = TmdbProvider::new(
            "test_key".to_string(),
            "http://127.0.0.1:9".to_string(),
            "https://image.tmdb.org/t/p/w500".to_string(),
            Duration::from_millis(500),
        )
        .unwrap();

        assert_eq!(provider.fetch_poster(19995).await, PLACEHOLDER_POSTER_URL);
    }
}
