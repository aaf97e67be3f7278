use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::RecommendationResponse,
    routes::AppState,
    services::{recommend_with_posters, recommendations::NOT_FOUND_MESSAGE},
};

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub title: Option<String>,
}

/// Handler for the recommendations endpoint
pub async fn recommend(
    State(state): State<AppState>,
    Query(params): Query<RecommendationQuery>,
) -> AppResult<Json<RecommendationResponse>> {
    let title = match params.title {
        Some(title) if !title.is_empty() => title,
        Some(_) => return Err(AppError::InvalidInput("Title cannot be empty".to_string())),
        None => return Err(AppError::InvalidInput("Missing title parameter".to_string())),
    };

    // Exact match, same as the HTML route; whitespace-only titles are looked up as-is
    let recommendations =
        recommend_with_posters(&state.recommender, state.posters.as_ref(), &title)
            .await
            .ok_or_else(|| AppError::NotFound(NOT_FOUND_MESSAGE.to_string()))?;

    Ok(Json(RecommendationResponse {
        title,
        recommendations,
    }))
}
