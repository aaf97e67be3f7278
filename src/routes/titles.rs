use axum::{extract::State, Json};

use crate::routes::AppState;

/// Handler listing every catalog title in catalog order
pub async fn list(State(state): State<AppState>) -> Json<Vec<String>> {
    let titles = state
        .context()
        .catalog()
        .titles()
        .map(str::to_string)
        .collect();
    Json(titles)
}
