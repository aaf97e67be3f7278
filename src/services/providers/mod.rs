//! Poster artwork providers
//!
//! Resolving a poster never fails from the caller's point of view: a
//! provider answers with an image URL, falling back to a placeholder when
//! the upstream service has nothing usable.

pub mod tmdb;

pub use tmdb::{TmdbProvider, PLACEHOLDER_POSTER_URL};

/// Trait for poster artwork sources
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait PosterProvider: Send + Sync {
    /// Resolve the poster image URL for a movie id, or the placeholder URL
    async fn fetch_poster(&self, movie_id: u64) -> String;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
