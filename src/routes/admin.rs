use axum::{
    Json, Router,
    body::Body,
    extract::{Path, State},
    http::{Request, StatusCode},
    middleware::{self, Next},
    response::Response,
    routing::{delete, post, put},
};
use axum_valid::Valid;
use uuid::Uuid;

use crate::{
    dto::{
        admin::{
            CardInput, CompetitionInput, EnrollTeamRequest, GameInput, GoalInput, LineupInput,
            ManagerInput, PlayerInput, SeasonInput, SubstitutionInput, TeamInput,
        },
        catalogue::{CompetitionSummary, ManagerSummary, PlayerSummary, SeasonSummary, TeamSummary},
        game::{GameSummary, Lineups, TimelineEvent},
    },
    error::AppError,
    services::admin_service,
    state::SharedState,
};

const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

/// Admin-only endpoints maintaining the catalogue, fixtures and match events.
pub fn router(state: SharedState) -> Router<SharedState> {
    Router::new()
        .route("/admin/competitions", post(create_competition))
        .route(
            "/admin/competitions/{competition_id}",
            put(update_competition).delete(delete_competition),
        )
        .route(
            "/admin/competitions/{competition_id}/seasons/{season_id}/teams",
            post(enroll_team),
        )
        .route(
            "/admin/competitions/{competition_id}/seasons/{season_id}/teams/{team_id}",
            delete(withdraw_team),
        )
        .route("/admin/seasons", post(create_season))
        .route(
            "/admin/seasons/{id}",
            put(update_season).delete(delete_season),
        )
        .route("/admin/teams", post(create_team))
        .route("/admin/teams/{id}", put(update_team).delete(delete_team))
        .route("/admin/players", post(create_player))
        .route(
            "/admin/players/{id}",
            put(update_player).delete(delete_player),
        )
        .route("/admin/managers", post(create_manager))
        .route(
            "/admin/managers/{id}",
            put(update_manager).delete(delete_manager),
        )
        .route("/admin/games", post(create_game))
        .route("/admin/games/{id}", put(update_game).delete(delete_game))
        .route("/admin/games/{id}/goals", post(add_goal))
        .route("/admin/games/{id}/goals/{event_id}", delete(delete_goal))
        .route("/admin/games/{id}/cards", post(add_card))
        .route("/admin/games/{id}/cards/{event_id}", delete(delete_card))
        .route("/admin/games/{id}/substitutions", post(add_substitution))
        .route(
            "/admin/games/{id}/substitutions/{event_id}",
            delete(delete_substitution),
        )
        .route("/admin/games/{id}/lineup", put(replace_lineup))
        .route_layer(middleware::from_fn_with_state(state, require_admin_token))
}

type Created<T> = (StatusCode, Json<T>);

fn created<T>(value: T) -> Created<T> {
    (StatusCode::CREATED, Json(value))
}

/// Create a competition.
#[utoipa::path(
    post,
    path = "/admin/competitions",
    tag = "admin",
    params(("X-Admin-Token" = String, Header, description = "Configured admin token")),
    request_body = CompetitionInput,
    responses(
        (status = 201, description = "Competition created", body = CompetitionSummary),
        (status = 400, description = "Invalid payload")
    )
)]
pub async fn create_competition(
    State(state): State<SharedState>,
    Valid(Json(payload)): Valid<Json<CompetitionInput>>,
) -> Result<Created<CompetitionSummary>, AppError> {
    Ok(created(
        admin_service::create_competition(&state, payload).await?,
    ))
}

/// Replace a competition's fields.
#[utoipa::path(
    put,
    path = "/admin/competitions/{competition_id}",
    tag = "admin",
    params(
        ("X-Admin-Token" = String, Header, description = "Configured admin token"),
        ("competition_id" = Uuid, Path, description = "Competition identifier")
    ),
    request_body = CompetitionInput,
    responses(
        (status = 200, description = "Competition updated", body = CompetitionSummary),
        (status = 404, description = "Unknown competition")
    )
)]
pub async fn update_competition(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Valid(Json(payload)): Valid<Json<CompetitionInput>>,
) -> Result<Json<CompetitionSummary>, AppError> {
    Ok(Json(
        admin_service::update_competition(&state, id, payload).await?,
    ))
}

/// Delete a competition and its enrollments.
#[utoipa::path(
    delete,
    path = "/admin/competitions/{competition_id}",
    tag = "admin",
    params(
        ("X-Admin-Token" = String, Header, description = "Configured admin token"),
        ("competition_id" = Uuid, Path, description = "Competition identifier")
    ),
    responses(
        (status = 204, description = "Competition deleted"),
        (status = 404, description = "Unknown competition"),
        (status = 409, description = "Competition still has games")
    )
)]
pub async fn delete_competition(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    admin_service::delete_competition(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Enroll a team in a competition-season.
#[utoipa::path(
    post,
    path = "/admin/competitions/{competition_id}/seasons/{season_id}/teams",
    tag = "admin",
    params(
        ("X-Admin-Token" = String, Header, description = "Configured admin token"),
        ("competition_id" = Uuid, Path, description = "Competition identifier"),
        ("season_id" = Uuid, Path, description = "Season identifier")
    ),
    request_body = EnrollTeamRequest,
    responses(
        (status = 201, description = "Team enrolled"),
        (status = 200, description = "Team was already enrolled"),
        (status = 404, description = "Unknown competition, season or team")
    )
)]
pub async fn enroll_team(
    State(state): State<SharedState>,
    Path((competition_id, season_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<EnrollTeamRequest>,
) -> Result<StatusCode, AppError> {
    let newly_enrolled =
        admin_service::enroll_team(&state, competition_id, season_id, payload.team_id).await?;
    Ok(if newly_enrolled {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    })
}

/// Withdraw a team from a competition-season.
#[utoipa::path(
    delete,
    path = "/admin/competitions/{competition_id}/seasons/{season_id}/teams/{team_id}",
    tag = "admin",
    params(
        ("X-Admin-Token" = String, Header, description = "Configured admin token"),
        ("competition_id" = Uuid, Path, description = "Competition identifier"),
        ("season_id" = Uuid, Path, description = "Season identifier"),
        ("team_id" = Uuid, Path, description = "Team identifier")
    ),
    responses(
        (status = 204, description = "Team withdrawn"),
        (status = 404, description = "Team not enrolled"),
        (status = 409, description = "Team still has games in this competition-season")
    )
)]
pub async fn withdraw_team(
    State(state): State<SharedState>,
    Path((competition_id, season_id, team_id)): Path<(Uuid, Uuid, Uuid)>,
) -> Result<StatusCode, AppError> {
    admin_service::withdraw_team(&state, competition_id, season_id, team_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/admin/seasons",
    tag = "admin",
    params(("X-Admin-Token" = String, Header, description = "Configured admin token")),
    request_body = SeasonInput,
    responses((status = 201, description = "Season created", body = SeasonSummary))
)]
pub async fn create_season(
    State(state): State<SharedState>,
    Valid(Json(payload)): Valid<Json<SeasonInput>>,
) -> Result<Created<SeasonSummary>, AppError> {
    Ok(created(admin_service::create_season(&state, payload).await?))
}

#[utoipa::path(
    put,
    path = "/admin/seasons/{id}",
    tag = "admin",
    params(
        ("X-Admin-Token" = String, Header, description = "Configured admin token"),
        ("id" = Uuid, Path, description = "Season identifier")
    ),
    request_body = SeasonInput,
    responses((status = 200, description = "Season updated", body = SeasonSummary))
)]
pub async fn update_season(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Valid(Json(payload)): Valid<Json<SeasonInput>>,
) -> Result<Json<SeasonSummary>, AppError> {
    Ok(Json(admin_service::update_season(&state, id, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/admin/seasons/{id}",
    tag = "admin",
    params(
        ("X-Admin-Token" = String, Header, description = "Configured admin token"),
        ("id" = Uuid, Path, description = "Season identifier")
    ),
    responses(
        (status = 204, description = "Season deleted"),
        (status = 404, description = "Unknown season"),
        (status = 409, description = "Season still has games")
    )
)]
pub async fn delete_season(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    admin_service::delete_season(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/admin/teams",
    tag = "admin",
    params(("X-Admin-Token" = String, Header, description = "Configured admin token")),
    request_body = TeamInput,
    responses((status = 201, description = "Team created", body = TeamSummary))
)]
pub async fn create_team(
    State(state): State<SharedState>,
    Valid(Json(payload)): Valid<Json<TeamInput>>,
) -> Result<Created<TeamSummary>, AppError> {
    Ok(created(admin_service::create_team(&state, payload).await?))
}

#[utoipa::path(
    put,
    path = "/admin/teams/{id}",
    tag = "admin",
    params(
        ("X-Admin-Token" = String, Header, description = "Configured admin token"),
        ("id" = Uuid, Path, description = "Team identifier")
    ),
    request_body = TeamInput,
    responses((status = 200, description = "Team updated", body = TeamSummary))
)]
pub async fn update_team(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Valid(Json(payload)): Valid<Json<TeamInput>>,
) -> Result<Json<TeamSummary>, AppError> {
    Ok(Json(admin_service::update_team(&state, id, payload).await?))
}

/// Delete a team that no game refers to.
#[utoipa::path(
    delete,
    path = "/admin/teams/{id}",
    tag = "admin",
    params(
        ("X-Admin-Token" = String, Header, description = "Configured admin token"),
        ("id" = Uuid, Path, description = "Team identifier")
    ),
    responses(
        (status = 204, description = "Team deleted"),
        (status = 409, description = "Team still referenced by games")
    )
)]
pub async fn delete_team(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    admin_service::delete_team(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/admin/players",
    tag = "admin",
    params(("X-Admin-Token" = String, Header, description = "Configured admin token")),
    request_body = PlayerInput,
    responses((status = 201, description = "Player created", body = PlayerSummary))
)]
pub async fn create_player(
    State(state): State<SharedState>,
    Valid(Json(payload)): Valid<Json<PlayerInput>>,
) -> Result<Created<PlayerSummary>, AppError> {
    Ok(created(admin_service::create_player(&state, payload).await?))
}

#[utoipa::path(
    put,
    path = "/admin/players/{id}",
    tag = "admin",
    params(
        ("X-Admin-Token" = String, Header, description = "Configured admin token"),
        ("id" = Uuid, Path, description = "Player identifier")
    ),
    request_body = PlayerInput,
    responses((status = 200, description = "Player updated", body = PlayerSummary))
)]
pub async fn update_player(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Valid(Json(payload)): Valid<Json<PlayerInput>>,
) -> Result<Json<PlayerSummary>, AppError> {
    Ok(Json(admin_service::update_player(&state, id, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/admin/players/{id}",
    tag = "admin",
    params(
        ("X-Admin-Token" = String, Header, description = "Configured admin token"),
        ("id" = Uuid, Path, description = "Player identifier")
    ),
    responses((status = 204, description = "Player deleted"))
)]
pub async fn delete_player(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    admin_service::delete_player(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/admin/managers",
    tag = "admin",
    params(("X-Admin-Token" = String, Header, description = "Configured admin token")),
    request_body = ManagerInput,
    responses((status = 201, description = "Manager created", body = ManagerSummary))
)]
pub async fn create_manager(
    State(state): State<SharedState>,
    Valid(Json(payload)): Valid<Json<ManagerInput>>,
) -> Result<Created<ManagerSummary>, AppError> {
    Ok(created(admin_service::create_manager(&state, payload).await?))
}

#[utoipa::path(
    put,
    path = "/admin/managers/{id}",
    tag = "admin",
    params(
        ("X-Admin-Token" = String, Header, description = "Configured admin token"),
        ("id" = Uuid, Path, description = "Manager identifier")
    ),
    request_body = ManagerInput,
    responses((status = 200, description = "Manager updated", body = ManagerSummary))
)]
pub async fn update_manager(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Valid(Json(payload)): Valid<Json<ManagerInput>>,
) -> Result<Json<ManagerSummary>, AppError> {
    Ok(Json(
        admin_service::update_manager(&state, id, payload).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/admin/managers/{id}",
    tag = "admin",
    params(
        ("X-Admin-Token" = String, Header, description = "Configured admin token"),
        ("id" = Uuid, Path, description = "Manager identifier")
    ),
    responses((status = 204, description = "Manager deleted"))
)]
pub async fn delete_manager(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    admin_service::delete_manager(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Schedule a game between two teams enrolled in the competition-season.
#[utoipa::path(
    post,
    path = "/admin/games",
    tag = "admin",
    params(("X-Admin-Token" = String, Header, description = "Configured admin token")),
    request_body = GameInput,
    responses(
        (status = 201, description = "Game created", body = GameSummary),
        (status = 400, description = "Same team twice, team not enrolled or invalid kick-off")
    )
)]
pub async fn create_game(
    State(state): State<SharedState>,
    Valid(Json(payload)): Valid<Json<GameInput>>,
) -> Result<Created<GameSummary>, AppError> {
    Ok(created(admin_service::create_game(&state, payload).await?))
}

#[utoipa::path(
    put,
    path = "/admin/games/{id}",
    tag = "admin",
    params(
        ("X-Admin-Token" = String, Header, description = "Configured admin token"),
        ("id" = Uuid, Path, description = "Game identifier")
    ),
    request_body = GameInput,
    responses((status = 200, description = "Game updated", body = GameSummary))
)]
pub async fn update_game(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Valid(Json(payload)): Valid<Json<GameInput>>,
) -> Result<Json<GameSummary>, AppError> {
    Ok(Json(admin_service::update_game(&state, id, payload).await?))
}

/// Delete a game with its goals, cards, substitutions and lineup.
#[utoipa::path(
    delete,
    path = "/admin/games/{id}",
    tag = "admin",
    params(
        ("X-Admin-Token" = String, Header, description = "Configured admin token"),
        ("id" = Uuid, Path, description = "Game identifier")
    ),
    responses((status = 204, description = "Game deleted"))
)]
pub async fn delete_game(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    admin_service::delete_game(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/admin/games/{id}/goals",
    tag = "admin",
    params(
        ("X-Admin-Token" = String, Header, description = "Configured admin token"),
        ("id" = Uuid, Path, description = "Game identifier")
    ),
    request_body = GoalInput,
    responses((status = 201, description = "Goal recorded", body = TimelineEvent))
)]
pub async fn add_goal(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Valid(Json(payload)): Valid<Json<GoalInput>>,
) -> Result<Created<TimelineEvent>, AppError> {
    Ok(created(admin_service::add_goal(&state, id, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/admin/games/{id}/goals/{event_id}",
    tag = "admin",
    params(
        ("X-Admin-Token" = String, Header, description = "Configured admin token"),
        ("id" = Uuid, Path, description = "Game identifier"),
        ("event_id" = Uuid, Path, description = "Goal identifier")
    ),
    responses((status = 204, description = "Goal deleted"))
)]
pub async fn delete_goal(
    State(state): State<SharedState>,
    Path((id, event_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, AppError> {
    admin_service::delete_goal(&state, id, event_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/admin/games/{id}/cards",
    tag = "admin",
    params(
        ("X-Admin-Token" = String, Header, description = "Configured admin token"),
        ("id" = Uuid, Path, description = "Game identifier")
    ),
    request_body = CardInput,
    responses((status = 201, description = "Card recorded", body = TimelineEvent))
)]
pub async fn add_card(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Valid(Json(payload)): Valid<Json<CardInput>>,
) -> Result<Created<TimelineEvent>, AppError> {
    Ok(created(admin_service::add_card(&state, id, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/admin/games/{id}/cards/{event_id}",
    tag = "admin",
    params(
        ("X-Admin-Token" = String, Header, description = "Configured admin token"),
        ("id" = Uuid, Path, description = "Game identifier"),
        ("event_id" = Uuid, Path, description = "Card identifier")
    ),
    responses((status = 204, description = "Card deleted"))
)]
pub async fn delete_card(
    State(state): State<SharedState>,
    Path((id, event_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, AppError> {
    admin_service::delete_card(&state, id, event_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/admin/games/{id}/substitutions",
    tag = "admin",
    params(
        ("X-Admin-Token" = String, Header, description = "Configured admin token"),
        ("id" = Uuid, Path, description = "Game identifier")
    ),
    request_body = SubstitutionInput,
    responses((status = 201, description = "Substitution recorded", body = TimelineEvent))
)]
pub async fn add_substitution(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Valid(Json(payload)): Valid<Json<SubstitutionInput>>,
) -> Result<Created<TimelineEvent>, AppError> {
    Ok(created(
        admin_service::add_substitution(&state, id, payload).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/admin/games/{id}/substitutions/{event_id}",
    tag = "admin",
    params(
        ("X-Admin-Token" = String, Header, description = "Configured admin token"),
        ("id" = Uuid, Path, description = "Game identifier"),
        ("event_id" = Uuid, Path, description = "Substitution identifier")
    ),
    responses((status = 204, description = "Substitution deleted"))
)]
pub async fn delete_substitution(
    State(state): State<SharedState>,
    Path((id, event_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, AppError> {
    admin_service::delete_substitution(&state, id, event_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Replace both lineups of a game.
#[utoipa::path(
    put,
    path = "/admin/games/{id}/lineup",
    tag = "admin",
    params(
        ("X-Admin-Token" = String, Header, description = "Configured admin token"),
        ("id" = Uuid, Path, description = "Game identifier")
    ),
    request_body = LineupInput,
    responses((status = 200, description = "Lineup stored", body = Lineups))
)]
pub async fn replace_lineup(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<LineupInput>,
) -> Result<Json<Lineups>, AppError> {
    Ok(Json(admin_service::replace_lineup(&state, id, payload).await?))
}

async fn require_admin_token(
    State(state): State<SharedState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let provided = req
        .headers()
        .get(ADMIN_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .ok_or_else(|| {
            AppError::Unauthorized("missing admin token header `X-Admin-Token`".into())
        })?;

    match state.config().admin_token() {
        Some(token) if token == provided => Ok(next.run(req).await),
        Some(_) => Err(AppError::Unauthorized("invalid admin token".into())),
        None => Err(AppError::Unauthorized(
            "admin area disabled: no admin token configured".into(),
        )),
    }
}
