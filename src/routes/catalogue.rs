use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::catalogue::{
        CompetitionSummary, ManagerSummary, PlayerSummary, SeasonSummary, TeamDetail,
        TeamFilterQuery, TeamSummary,
    },
    error::AppError,
    services::catalogue_service,
    state::SharedState,
};

/// Public, read-only catalogue routes.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/competitions", get(list_competitions))
        .route("/competitions/{competition_id}", get(get_competition))
        .route(
            "/competitions/{competition_id}/seasons/{season_id}/teams",
            get(list_enrolled_teams),
        )
        .route("/seasons", get(list_seasons))
        .route("/seasons/{id}", get(get_season))
        .route("/teams", get(list_teams))
        .route("/teams/{id}", get(get_team))
        .route("/players", get(list_players))
        .route("/players/{id}", get(get_player))
        .route("/managers", get(list_managers))
        .route("/managers/{id}", get(get_manager))
}

/// List competitions sorted by name.
#[utoipa::path(
    get,
    path = "/competitions",
    tag = "catalogue",
    responses((status = 200, description = "Competitions", body = [CompetitionSummary]))
)]
pub async fn list_competitions(
    State(state): State<SharedState>,
) -> Result<Json<Vec<CompetitionSummary>>, AppError> {
    Ok(Json(catalogue_service::list_competitions(&state).await?))
}

#[utoipa::path(
    get,
    path = "/competitions/{competition_id}",
    tag = "catalogue",
    params(("competition_id" = Uuid, Path, description = "Competition identifier")),
    responses(
        (status = 200, description = "Competition", body = CompetitionSummary),
        (status = 404, description = "Unknown competition")
    )
)]
pub async fn get_competition(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CompetitionSummary>, AppError> {
    Ok(Json(catalogue_service::get_competition(&state, id).await?))
}

/// Teams enrolled in a competition-season, sorted by name.
#[utoipa::path(
    get,
    path = "/competitions/{competition_id}/seasons/{season_id}/teams",
    tag = "catalogue",
    params(
        ("competition_id" = Uuid, Path, description = "Competition identifier"),
        ("season_id" = Uuid, Path, description = "Season identifier")
    ),
    responses(
        (status = 200, description = "Enrolled teams", body = [TeamSummary]),
        (status = 404, description = "Unknown competition or season")
    )
)]
pub async fn list_enrolled_teams(
    State(state): State<SharedState>,
    Path((competition_id, season_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Vec<TeamSummary>>, AppError> {
    Ok(Json(
        catalogue_service::enrolled_teams(&state, competition_id, season_id).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/seasons",
    tag = "catalogue",
    responses((status = 200, description = "Seasons", body = [SeasonSummary]))
)]
pub async fn list_seasons(
    State(state): State<SharedState>,
) -> Result<Json<Vec<SeasonSummary>>, AppError> {
    Ok(Json(catalogue_service::list_seasons(&state).await?))
}

#[utoipa::path(
    get,
    path = "/seasons/{id}",
    tag = "catalogue",
    params(("id" = Uuid, Path, description = "Season identifier")),
    responses(
        (status = 200, description = "Season", body = SeasonSummary),
        (status = 404, description = "Unknown season")
    )
)]
pub async fn get_season(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SeasonSummary>, AppError> {
    Ok(Json(catalogue_service::get_season(&state, id).await?))
}

#[utoipa::path(
    get,
    path = "/teams",
    tag = "catalogue",
    responses((status = 200, description = "Teams", body = [TeamSummary]))
)]
pub async fn list_teams(
    State(state): State<SharedState>,
) -> Result<Json<Vec<TeamSummary>>, AppError> {
    Ok(Json(catalogue_service::list_teams(&state).await?))
}

/// Team page including squad, managers and recent games.
#[utoipa::path(
    get,
    path = "/teams/{id}",
    tag = "catalogue",
    params(("id" = Uuid, Path, description = "Team identifier")),
    responses(
        (status = 200, description = "Team detail", body = TeamDetail),
        (status = 404, description = "Unknown team")
    )
)]
pub async fn get_team(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TeamDetail>, AppError> {
    Ok(Json(catalogue_service::get_team(&state, id).await?))
}

#[utoipa::path(
    get,
    path = "/players",
    tag = "catalogue",
    params(TeamFilterQuery),
    responses((status = 200, description = "Players", body = [PlayerSummary]))
)]
pub async fn list_players(
    State(state): State<SharedState>,
    Query(query): Query<TeamFilterQuery>,
) -> Result<Json<Vec<PlayerSummary>>, AppError> {
    Ok(Json(
        catalogue_service::list_players(&state, query.team_id).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/players/{id}",
    tag = "catalogue",
    params(("id" = Uuid, Path, description = "Player identifier")),
    responses(
        (status = 200, description = "Player", body = PlayerSummary),
        (status = 404, description = "Unknown player")
    )
)]
pub async fn get_player(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PlayerSummary>, AppError> {
    Ok(Json(catalogue_service::get_player(&state, id).await?))
}

#[utoipa::path(
    get,
    path = "/managers",
    tag = "catalogue",
    params(TeamFilterQuery),
    responses((status = 200, description = "Managers", body = [ManagerSummary]))
)]
pub async fn list_managers(
    State(state): State<SharedState>,
    Query(query): Query<TeamFilterQuery>,
) -> Result<Json<Vec<ManagerSummary>>, AppError> {
    Ok(Json(
        catalogue_service::list_managers(&state, query.team_id).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/managers/{id}",
    tag = "catalogue",
    params(("id" = Uuid, Path, description = "Manager identifier")),
    responses(
        (status = 200, description = "Manager", body = ManagerSummary),
        (status = 404, description = "Unknown manager")
    )
)]
pub async fn get_manager(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ManagerSummary>, AppError> {
    Ok(Json(catalogue_service::get_manager(&state, id).await?))
}
