use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::{
        game::{GameDetail, GameSummary},
        standings::StandingsResponse,
    },
    error::AppError,
    services::{game_service, standings_service},
    state::SharedState,
};

/// Fixture listings, match centre and league table.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route(
            "/competitions/{competition_id}/seasons/{season_id}/games",
            get(list_games),
        )
        .route(
            "/competitions/{competition_id}/seasons/{season_id}/table",
            get(league_table),
        )
        .route("/games/{id}", get(get_game))
}

/// Games of a competition-season ordered by kick-off, each with its score.
#[utoipa::path(
    get,
    path = "/competitions/{competition_id}/seasons/{season_id}/games",
    tag = "games",
    params(
        ("competition_id" = Uuid, Path, description = "Competition identifier"),
        ("season_id" = Uuid, Path, description = "Season identifier")
    ),
    responses(
        (status = 200, description = "Games", body = [GameSummary]),
        (status = 404, description = "Unknown competition or season")
    )
)]
pub async fn list_games(
    State(state): State<SharedState>,
    Path((competition_id, season_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Vec<GameSummary>>, AppError> {
    Ok(Json(
        game_service::list_games(&state, competition_id, season_id).await?,
    ))
}

/// League table computed from the recorded goals.
#[utoipa::path(
    get,
    path = "/competitions/{competition_id}/seasons/{season_id}/table",
    tag = "games",
    params(
        ("competition_id" = Uuid, Path, description = "Competition identifier"),
        ("season_id" = Uuid, Path, description = "Season identifier")
    ),
    responses(
        (status = 200, description = "League table", body = StandingsResponse),
        (status = 404, description = "Unknown competition or season"),
        (status = 503, description = "Storage unavailable")
    )
)]
pub async fn league_table(
    State(state): State<SharedState>,
    Path((competition_id, season_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<StandingsResponse>, AppError> {
    Ok(Json(
        standings_service::league_table(&state, competition_id, season_id).await?,
    ))
}

/// Match centre: score, timeline and lineups.
#[utoipa::path(
    get,
    path = "/games/{id}",
    tag = "games",
    params(("id" = Uuid, Path, description = "Game identifier")),
    responses(
        (status = 200, description = "Game detail", body = GameDetail),
        (status = 404, description = "Unknown game")
    )
)]
pub async fn get_game(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<GameDetail>, AppError> {
    Ok(Json(game_service::get_game(&state, id).await?))
}
