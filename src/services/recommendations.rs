use std::sync::Arc;

use crate::{
    data::RecommendationContext,
    models::{Recommendation, RecommendedMovie, SimilarMovie},
    services::providers::PosterProvider,
};

/// Maximum number of recommendations per lookup
pub const RECOMMENDATION_COUNT: usize = 10;

/// Message shown when the requested title is not in the catalog
pub const NOT_FOUND_MESSAGE: &str = "Movie not found in database.";

/// Nearest-neighbour lookup over the precomputed similarity matrix
#[derive(Clone)]
pub struct Recommender {
    context: Arc<RecommendationContext>,
}

impl Recommender {
    pub fn new(context: Arc<RecommendationContext>) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &RecommendationContext {
        &self.context
    }

    /// Finds the movies most similar to `title`
    ///
    /// The title must match a catalog entry exactly; duplicates resolve to the
    /// first entry in load order. The queried movie is excluded by index, so
    /// the result never contains it even if its self-similarity is not the
    /// row maximum. Neighbours without a TMDB id are dropped after ranking,
    /// which can leave fewer than `RECOMMENDATION_COUNT` results.
    pub fn recommend(&self, title: &str) -> Recommendation {
        let catalog = self.context.catalog();

        let Some(entry) = catalog.find_by_title(title) else {
            return Recommendation::NotFound;
        };

        let Some(row) = self.context.matrix().row(entry.index) else {
            // Context construction guarantees one row per entry
            return Recommendation::Similar(Vec::new());
        };

        let similar = rank_neighbours(row, entry.index)
            .into_iter()
            .take(RECOMMENDATION_COUNT)
            .filter_map(|(index, score)| {
                let neighbour = catalog.get(index)?;
                let movie_id = neighbour.movie_id?;
                Some(SimilarMovie {
                    index,
                    movie_id,
                    title: neighbour.title.clone(),
                    score,
                })
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            title = %title,
            index = entry.index,
            results = similar.len(),
            "Similarity lookup completed"
        );

        Recommendation::Similar(similar)
    }
}

/// Ranks every index except `exclude` by descending score
///
/// The sort is stable, so equal scores keep ascending index order; `-0.0`
/// and `0.0` count as equal. NaN scores rank below everything else.
pub fn rank_neighbours(row: &[f64], exclude: usize) -> Vec<(usize, f64)> {
    let mut ranked: Vec<(usize, f64)> = row
        .iter()
        .copied()
        .enumerate()
        .filter(|&(index, _)| index != exclude)
        .collect();

    ranked.sort_by(|a, b| rank_key(b.1).total_cmp(&rank_key(a.1)));
    ranked
}

fn rank_key(score: f64) -> f64 {
    if score.is_nan() {
        f64::NEG_INFINITY
    } else if score == 0.0 {
        0.0
    } else {
        score
    }
}

/// Runs a lookup and resolves a poster for each result, one at a time in
/// rank order. Returns `None` when the title is not in the catalog.
pub async fn recommend_with_posters(
    recommender: &Recommender,
    posters: &dyn PosterProvider,
    title: &str,
) -> Option<Vec<RecommendedMovie>> {
    let similar = match recommender.recommend(title) {
        Recommendation::NotFound => {
            tracing::info!(title = %title, "Title not found in catalog");
            return None;
        }
        Recommendation::Similar(similar) => similar,
    };

    let mut recommendations = Vec::with_capacity(similar.len());
    for movie in similar {
        let poster_url = posters.fetch_poster(movie.movie_id).await;
        recommendations.push(RecommendedMovie {
            title: movie.title,
            movie_id: movie.movie_id,
            poster_url,
        });
    }

    tracing::info!(
        title = %title,
        results = recommendations.len(),
        provider = posters.name(),
        "Recommendations resolved"
    );

    Some(recommendations)
}
