use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};

use crate::{
    dto::search::{SearchQuery, SearchResponse},
    error::AppError,
    services::search_service,
    state::SharedState,
};

pub fn router() -> Router<SharedState> {
    Router::new().route("/search", get(search))
}

/// Search competitions, teams, players and managers by name.
#[utoipa::path(
    get,
    path = "/search",
    tag = "search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Hits grouped by kind", body = SearchResponse),
        (status = 400, description = "Empty query")
    )
)]
pub async fn search(
    State(state): State<SharedState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, AppError> {
    Ok(Json(search_service::search(&state, &query.q).await?))
}
