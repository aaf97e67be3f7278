use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;

use crate::{routes::AppState, services::recommend_with_posters, views};

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub title: Option<String>,
}

/// Landing page with the movie selector
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(views::index_page(state.context().catalog(), None))
}

/// Selector plus results (or a warning) for the submitted title
pub async fn recommend(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
) -> Html<String> {
    let catalog = state.context().catalog();

    let Some(title) = params.title else {
        return Html(views::index_page(catalog, None));
    };

    let recommendations =
        recommend_with_posters(&state.recommender, state.posters.as_ref(), &title).await;

    Html(views::results_page(
        catalog,
        &title,
        recommendations.as_deref(),
    ))
}
