use std::sync::Arc;

use crate::{
    data::RecommendationContext,
    services::{PosterProvider, Recommender},
};

/// Shared application state
///
/// Everything here is immutable after startup; cloning only bumps `Arc`s.
#[derive(Clone)]
pub struct AppState {
    pub recommender: Recommender,
    pub posters: Arc<dyn PosterProvider>,
}

impl AppState {
    pub fn new(context: Arc<RecommendationContext>, posters: Arc<dyn PosterProvider>) -> Self {
        Self {
            recommender: Recommender::new(context),
            posters,
        }
    }

    pub fn context(&self) -> &RecommendationContext {
        self.recommender.context()
    }
}
