//! Business logic powering the admin REST routes: catalogue maintenance,
//! enrollment, fixtures and match events. Path identifiers that do not exist
//! yield `NotFound`; dangling identifiers inside a payload yield `InvalidInput`.

use std::{collections::HashSet, sync::Arc};

use futures::{future::try_join_all, try_join};
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    dao::{
        football_store::FootballStore,
        models::{
            CardEntity, CompetitionEntity, EnrollmentEntity, GameEntity, GameFilter, GoalEntity,
            LineupEntryEntity, ManagerEntity, PlayerEntity, SeasonEntity, SubstitutionEntity,
            TeamEntity,
        },
    },
    dto::{
        admin::{
            CardInput, CompetitionInput, GameInput, GoalInput, LineupEntryInput, LineupInput,
            ManagerInput, PlayerInput, SeasonInput, SubstitutionInput, TeamInput,
        },
        catalogue::{CompetitionSummary, ManagerSummary, PlayerSummary, SeasonSummary, TeamSummary},
        game::{GameSummary, Lineups, TimelineEvent},
        parse_timestamp,
    },
    error::ServiceError,
    services::{catalogue_service, game_service, not_found},
    state::SharedState,
};

fn trimmed(value: String) -> String {
    value.trim().to_owned()
}

fn trimmed_opt(value: Option<String>) -> Option<String> {
    value.map(trimmed).filter(|value| !value.is_empty())
}

fn deleted_or_not_found(deleted: bool, kind: &str, id: Uuid) -> Result<(), ServiceError> {
    if deleted {
        info!(kind, %id, "deleted");
        Ok(())
    } else {
        Err(not_found(kind, id))
    }
}

/// Refuse to remove a record while games selected by `filter` still point at it.
async fn ensure_no_games(
    store: &Arc<dyn FootballStore>,
    filter: GameFilter,
    kind: &str,
    id: Uuid,
) -> Result<(), ServiceError> {
    let games = store.list_games(filter).await?;
    if games.is_empty() {
        return Ok(());
    }
    Err(ServiceError::Conflict(format!(
        "{kind} `{id}` still has {} game(s)",
        games.len()
    )))
}

async fn ensure_team_ref(
    store: &Arc<dyn FootballStore>,
    team_id: Option<Uuid>,
) -> Result<(), ServiceError> {
    let Some(team_id) = team_id else {
        return Ok(());
    };
    match store.find_team(team_id).await? {
        Some(_) => Ok(()),
        None => Err(ServiceError::InvalidInput(format!(
            "team `{team_id}` does not exist"
        ))),
    }
}

async fn ensure_player_refs(
    store: &Arc<dyn FootballStore>,
    player_ids: impl IntoIterator<Item = Uuid>,
) -> Result<(), ServiceError> {
    let ids: Vec<Uuid> = player_ids.into_iter().collect();
    let found = try_join_all(ids.iter().map(|id| store.find_player(*id))).await?;
    match ids.iter().zip(found).find(|(_, player)| player.is_none()) {
        Some((id, _)) => Err(ServiceError::InvalidInput(format!(
            "player `{id}` does not exist"
        ))),
        None => Ok(()),
    }
}

async fn require_game(store: &Arc<dyn FootballStore>, id: Uuid) -> Result<GameEntity, ServiceError> {
    store
        .find_game(id)
        .await?
        .ok_or_else(|| not_found("game", id))
}

// ---------------------------------------------------------------------------
// Catalogue
// ---------------------------------------------------------------------------

/// Create a competition with a fresh id.
pub async fn create_competition(
    state: &SharedState,
    input: CompetitionInput,
) -> Result<CompetitionSummary, ServiceError> {
    save_competition(state, Uuid::new_v4(), input).await
}

/// Overwrite an existing competition.
pub async fn update_competition(
    state: &SharedState,
    id: Uuid,
    input: CompetitionInput,
) -> Result<CompetitionSummary, ServiceError> {
    let store = state.require_store().await?;
    if store.find_competition(id).await?.is_none() {
        return Err(not_found("competition", id));
    }
    save_competition(state, id, input).await
}

async fn save_competition(
    state: &SharedState,
    id: Uuid,
    input: CompetitionInput,
) -> Result<CompetitionSummary, ServiceError> {
    let store = state.require_store().await?;
    let entity = CompetitionEntity {
        id,
        name: trimmed(input.name),
        country: trimmed_opt(input.country),
    };
    store.save_competition(entity.clone()).await?;
    debug!(%id, name = %entity.name, "competition saved");
    Ok(entity.into())
}

/// Delete a competition and its enrollments; refused while it has games.
pub async fn delete_competition(state: &SharedState, id: Uuid) -> Result<(), ServiceError> {
    let store = state.require_store().await?;
    ensure_no_games(&store, GameFilter::competition(id), "competition", id).await?;
    deleted_or_not_found(store.delete_competition(id).await?, "competition", id)
}

/// Create a season with a fresh id.
pub async fn create_season(
    state: &SharedState,
    input: SeasonInput,
) -> Result<SeasonSummary, ServiceError> {
    save_season(state, Uuid::new_v4(), input).await
}

/// Overwrite an existing season.
pub async fn update_season(
    state: &SharedState,
    id: Uuid,
    input: SeasonInput,
) -> Result<SeasonSummary, ServiceError> {
    let store = state.require_store().await?;
    if store.find_season(id).await?.is_none() {
        return Err(not_found("season", id));
    }
    save_season(state, id, input).await
}

async fn save_season(
    state: &SharedState,
    id: Uuid,
    input: SeasonInput,
) -> Result<SeasonSummary, ServiceError> {
    let store = state.require_store().await?;
    let entity = SeasonEntity {
        id,
        name: trimmed(input.name),
    };
    store.save_season(entity.clone()).await?;
    debug!(%id, name = %entity.name, "season saved");
    Ok(entity.into())
}

/// Delete a season and its enrollments; refused while it has games.
pub async fn delete_season(state: &SharedState, id: Uuid) -> Result<(), ServiceError> {
    let store = state.require_store().await?;
    ensure_no_games(&store, GameFilter::season(id), "season", id).await?;
    deleted_or_not_found(store.delete_season(id).await?, "season", id)
}

/// Create a team with a fresh id.
pub async fn create_team(state: &SharedState, input: TeamInput) -> Result<TeamSummary, ServiceError> {
    save_team(state, Uuid::new_v4(), input).await
}

/// Overwrite an existing team.
pub async fn update_team(
    state: &SharedState,
    id: Uuid,
    input: TeamInput,
) -> Result<TeamSummary, ServiceError> {
    let store = state.require_store().await?;
    if store.find_team(id).await?.is_none() {
        return Err(not_found("team", id));
    }
    save_team(state, id, input).await
}

async fn save_team(
    state: &SharedState,
    id: Uuid,
    input: TeamInput,
) -> Result<TeamSummary, ServiceError> {
    let store = state.require_store().await?;
    let entity = TeamEntity {
        id,
        name: trimmed(input.name),
        short_name: trimmed_opt(input.short_name),
        founded: input.founded,
        stadium: trimmed_opt(input.stadium),
    };
    store.save_team(entity.clone()).await?;
    debug!(%id, name = %entity.name, "team saved");
    Ok(entity.into())
}

/// Delete a team and its enrollments; refused while it plays in any game.
pub async fn delete_team(state: &SharedState, id: Uuid) -> Result<(), ServiceError> {
    let store = state.require_store().await?;
    ensure_no_games(&store, GameFilter::team(id), "team", id).await?;
    deleted_or_not_found(store.delete_team(id).await?, "team", id)
}

/// Create a player; an optional `team_id` must exist.
pub async fn create_player(
    state: &SharedState,
    input: PlayerInput,
) -> Result<PlayerSummary, ServiceError> {
    save_player(state, Uuid::new_v4(), input).await
}

/// Overwrite an existing player.
pub async fn update_player(
    state: &SharedState,
    id: Uuid,
    input: PlayerInput,
) -> Result<PlayerSummary, ServiceError> {
    let store = state.require_store().await?;
    if store.find_player(id).await?.is_none() {
        return Err(not_found("player", id));
    }
    save_player(state, id, input).await
}

async fn save_player(
    state: &SharedState,
    id: Uuid,
    input: PlayerInput,
) -> Result<PlayerSummary, ServiceError> {
    let store = state.require_store().await?;
    ensure_team_ref(&store, input.team_id).await?;
    let entity = PlayerEntity {
        id,
        name: trimmed(input.name),
        position: input.position.into(),
        nationality: trimmed_opt(input.nationality),
        shirt_number: input.shirt_number,
        team_id: input.team_id,
    };
    store.save_player(entity.clone()).await?;
    debug!(%id, name = %entity.name, "player saved");
    Ok(entity.into())
}

/// Delete a player.
pub async fn delete_player(state: &SharedState, id: Uuid) -> Result<(), ServiceError> {
    let store = state.require_store().await?;
    deleted_or_not_found(store.delete_player(id).await?, "player", id)
}

/// Create a manager; an optional `team_id` must exist.
pub async fn create_manager(
    state: &SharedState,
    input: ManagerInput,
) -> Result<ManagerSummary, ServiceError> {
    save_manager(state, Uuid::new_v4(), input).await
}

/// Overwrite an existing manager.
pub async fn update_manager(
    state: &SharedState,
    id: Uuid,
    input: ManagerInput,
) -> Result<ManagerSummary, ServiceError> {
    let store = state.require_store().await?;
    if store.find_manager(id).await?.is_none() {
        return Err(not_found("manager", id));
    }
    save_manager(state, id, input).await
}

async fn save_manager(
    state: &SharedState,
    id: Uuid,
    input: ManagerInput,
) -> Result<ManagerSummary, ServiceError> {
    let store = state.require_store().await?;
    ensure_team_ref(&store, input.team_id).await?;
    let entity = ManagerEntity {
        id,
        name: trimmed(input.name),
        nationality: trimmed_opt(input.nationality),
        team_id: input.team_id,
    };
    store.save_manager(entity.clone()).await?;
    debug!(%id, name = %entity.name, "manager saved");
    Ok(entity.into())
}

/// Delete a manager.
pub async fn delete_manager(state: &SharedState, id: Uuid) -> Result<(), ServiceError> {
    let store = state.require_store().await?;
    deleted_or_not_found(store.delete_manager(id).await?, "manager", id)
}

// ---------------------------------------------------------------------------
// Enrollment
// ---------------------------------------------------------------------------

/// Enroll a team; returns `false` when it was already enrolled.
pub async fn enroll_team(
    state: &SharedState,
    competition_id: Uuid,
    season_id: Uuid,
    team_id: Uuid,
) -> Result<bool, ServiceError> {
    catalogue_service::competition_season(state, competition_id, season_id).await?;
    let store = state.require_store().await?;
    if store.find_team(team_id).await?.is_none() {
        return Err(not_found("team", team_id));
    }
    let created = store
        .enroll_team(EnrollmentEntity {
            competition_id,
            season_id,
            team_id,
        })
        .await?;
    info!(%competition_id, %season_id, %team_id, created, "team enrolled");
    Ok(created)
}

/// Withdraw a team; refused while it still has games in that competition-season.
pub async fn withdraw_team(
    state: &SharedState,
    competition_id: Uuid,
    season_id: Uuid,
    team_id: Uuid,
) -> Result<(), ServiceError> {
    let store = state.require_store().await?;
    ensure_no_games(
        &store,
        GameFilter::competition_season(competition_id, season_id).with_team(team_id),
        "team",
        team_id,
    )
    .await?;
    let removed = store
        .withdraw_team(EnrollmentEntity {
            competition_id,
            season_id,
            team_id,
        })
        .await?;
    if !removed {
        return Err(ServiceError::NotFound(format!(
            "team `{team_id}` is not enrolled in competition `{competition_id}` season `{season_id}`"
        )));
    }
    info!(%competition_id, %season_id, %team_id, "team withdrawn");
    Ok(())
}

// ---------------------------------------------------------------------------
// Games
// ---------------------------------------------------------------------------

/// Schedule a game between two teams enrolled in its competition-season.
pub async fn create_game(state: &SharedState, input: GameInput) -> Result<GameSummary, ServiceError> {
    save_game(state, Uuid::new_v4(), input).await
}

/// Overwrite an existing game, re-checking teams and enrollment.
pub async fn update_game(
    state: &SharedState,
    id: Uuid,
    input: GameInput,
) -> Result<GameSummary, ServiceError> {
    let store = state.require_store().await?;
    require_game(&store, id).await?;
    save_game(state, id, input).await
}

async fn save_game(
    state: &SharedState,
    id: Uuid,
    input: GameInput,
) -> Result<GameSummary, ServiceError> {
    if input.home_team_id == input.away_team_id {
        return Err(ServiceError::InvalidInput(
            "home and away teams must differ".into(),
        ));
    }
    let kickoff = parse_timestamp(&input.kickoff)
        .map_err(|err| ServiceError::InvalidInput(format!("invalid kickoff: {err}")))?;

    catalogue_service::competition_season(state, input.competition_id, input.season_id).await?;
    let store = state.require_store().await?;
    let enrolled: HashSet<Uuid> = store
        .enrolled_teams(input.competition_id, input.season_id)
        .await?
        .into_iter()
        .map(|team| team.id)
        .collect();
    for team_id in [input.home_team_id, input.away_team_id] {
        if !enrolled.contains(&team_id) {
            return Err(ServiceError::InvalidInput(format!(
                "team `{team_id}` is not enrolled in this competition-season"
            )));
        }
    }

    let game = GameEntity {
        id,
        competition_id: input.competition_id,
        season_id: input.season_id,
        home_team_id: input.home_team_id,
        away_team_id: input.away_team_id,
        kickoff,
        venue: trimmed_opt(input.venue),
    };
    store.save_game(game.clone()).await?;
    info!(%id, home = %game.home_team_id, away = %game.away_team_id, "game saved");

    let mut summaries = game_service::summarize_games(store.as_ref(), vec![game]).await?;
    summaries.pop().ok_or_else(|| not_found("game", id))
}

/// Delete a game together with its events and lineup.
pub async fn delete_game(state: &SharedState, id: Uuid) -> Result<(), ServiceError> {
    let store = state.require_store().await?;
    deleted_or_not_found(store.delete_game(id).await?, "game", id)
}

// ---------------------------------------------------------------------------
// Match events
// ---------------------------------------------------------------------------

/// Record a goal; scorer and assist must be known players when given.
pub async fn add_goal(
    state: &SharedState,
    game_id: Uuid,
    input: GoalInput,
) -> Result<TimelineEvent, ServiceError> {
    let store = state.require_store().await?;
    require_game(&store, game_id).await?;
    ensure_player_refs(&store, input.scorer_id.into_iter().chain(input.assist_id)).await?;

    let goal = GoalEntity {
        id: Uuid::new_v4(),
        game_id,
        home: input.side.is_home(),
        minute: input.minute,
        scorer_id: input.scorer_id,
        assist_id: input.assist_id,
        penalty: input.penalty,
        own_goal: input.own_goal,
    };
    store.save_goal(goal.clone()).await?;
    debug!(%game_id, goal_id = %goal.id, minute = goal.minute, "goal recorded");
    Ok(goal.into())
}

/// Remove one goal from a game.
pub async fn delete_goal(state: &SharedState, game_id: Uuid, id: Uuid) -> Result<(), ServiceError> {
    let store = state.require_store().await?;
    deleted_or_not_found(store.delete_goal(game_id, id).await?, "goal", id)
}

/// Record a booking.
pub async fn add_card(
    state: &SharedState,
    game_id: Uuid,
    input: CardInput,
) -> Result<TimelineEvent, ServiceError> {
    let store = state.require_store().await?;
    require_game(&store, game_id).await?;
    ensure_player_refs(&store, [input.player_id]).await?;

    let card = CardEntity {
        id: Uuid::new_v4(),
        game_id,
        player_id: input.player_id,
        home: input.side.is_home(),
        minute: input.minute,
        colour: input.colour.into(),
    };
    store.save_card(card.clone()).await?;
    debug!(%game_id, card_id = %card.id, minute = card.minute, "card recorded");
    Ok(card.into())
}

/// Remove one card from a game.
pub async fn delete_card(state: &SharedState, game_id: Uuid, id: Uuid) -> Result<(), ServiceError> {
    let store = state.require_store().await?;
    deleted_or_not_found(store.delete_card(game_id, id).await?, "card", id)
}

/// Record a substitution; the players coming on and off must differ.
pub async fn add_substitution(
    state: &SharedState,
    game_id: Uuid,
    input: SubstitutionInput,
) -> Result<TimelineEvent, ServiceError> {
    if input.player_in_id == input.player_out_id {
        return Err(ServiceError::InvalidInput(
            "a player cannot replace themselves".into(),
        ));
    }
    let store = state.require_store().await?;
    require_game(&store, game_id).await?;
    ensure_player_refs(&store, [input.player_in_id, input.player_out_id]).await?;

    let substitution = SubstitutionEntity {
        id: Uuid::new_v4(),
        game_id,
        home: input.side.is_home(),
        minute: input.minute,
        player_in_id: input.player_in_id,
        player_out_id: input.player_out_id,
    };
    store.save_substitution(substitution.clone()).await?;
    debug!(%game_id, substitution_id = %substitution.id, "substitution recorded");
    Ok(substitution.into())
}

/// Remove one substitution from a game.
pub async fn delete_substitution(
    state: &SharedState,
    game_id: Uuid,
    id: Uuid,
) -> Result<(), ServiceError> {
    let store = state.require_store().await?;
    deleted_or_not_found(
        store.delete_substitution(game_id, id).await?,
        "substitution",
        id,
    )
}

/// Replace both lineups of a game. A player may appear only once across sides.
pub async fn replace_lineup(
    state: &SharedState,
    game_id: Uuid,
    input: LineupInput,
) -> Result<Lineups, ServiceError> {
    let store = state.require_store().await?;
    require_game(&store, game_id).await?;

    let to_entity = |home: bool| {
        move |entry: LineupEntryInput| LineupEntryEntity {
            game_id,
            player_id: entry.player_id,
            home,
            starter: entry.starter,
            position: entry.position.map(Into::into),
        }
    };
    let entries: Vec<LineupEntryEntity> = input
        .home
        .into_iter()
        .map(to_entity(true))
        .chain(input.away.into_iter().map(to_entity(false)))
        .collect();

    let mut seen = HashSet::with_capacity(entries.len());
    if let Some(duplicate) = entries.iter().find(|entry| !seen.insert(entry.player_id)) {
        return Err(ServiceError::InvalidInput(format!(
            "player `{}` listed more than once",
            duplicate.player_id
        )));
    }
    let player_ids: Vec<Uuid> = entries.iter().map(|entry| entry.player_id).collect();
    let (_, players) = try_join!(
        ensure_player_refs(&store, player_ids),
        async { store.list_players(None).await.map_err(ServiceError::from) },
    )?;

    store.replace_lineup(game_id, entries.clone()).await?;
    debug!(%game_id, players = entries.len(), "lineup replaced");

    let names = players.into_iter().map(|p| (p.id, p.name)).collect();
    Ok(game_service::build_lineups(&entries, &names))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::AppConfig,
        dao::football_store::memory::MemoryFootballStore,
        dto::{catalogue::PositionDto, game::Side},
        services::game_service,
        state::AppState,
    };

    struct Fixture {
        state: SharedState,
        competition_id: Uuid,
        season_id: Uuid,
        home: Uuid,
        away: Uuid,
    }

    async fn fixture() -> Fixture {
        let state =
            AppState::with_store(AppConfig::default(), Arc::new(MemoryFootballStore::new())).await;
        let competition = create_competition(
            &state,
            CompetitionInput {
                name: " Premier League ".into(),
                country: Some("England".into()),
            },
        )
        .await
        .unwrap();
        let season = create_season(
            &state,
            SeasonInput {
                name: "2023/24".into(),
            },
        )
        .await
        .unwrap();
        let mut teams = Vec::new();
        for name in ["Arsenal", "Chelsea"] {
            let team = create_team(
                &state,
                TeamInput {
                    name: name.into(),
                    short_name: None,
                    founded: None,
                    stadium: None,
                },
            )
            .await
            .unwrap();
            assert!(
                enroll_team(&state, competition.id, season.id, team.id)
                    .await
                    .unwrap()
            );
            teams.push(team.id);
        }
        assert_eq!(competition.name, "Premier League");
        Fixture {
            state,
            competition_id: competition.id,
            season_id: season.id,
            home: teams[0],
            away: teams[1],
        }
    }

    fn game_input(fixture: &Fixture, home: Uuid, away: Uuid) -> GameInput {
        GameInput {
            competition_id: fixture.competition_id,
            season_id: fixture.season_id,
            home_team_id: home,
            away_team_id: away,
            kickoff: "2024-08-17T14:00:00Z".into(),
            venue: None,
        }
    }

    async fn player(state: &SharedState, name: &str) -> Uuid {
        create_player(
            state,
            PlayerInput {
                name: name.into(),
                position: PositionDto::Midfielder,
                nationality: None,
                shirt_number: None,
                team_id: None,
            },
        )
        .await
        .unwrap()
        .id
    }

    #[tokio::test]
    async fn enrolling_twice_reports_existing_enrollment() {
        let f = fixture().await;
        assert!(
            !enroll_team(&f.state, f.competition_id, f.season_id, f.home)
                .await
                .unwrap()
        );
        withdraw_team(&f.state, f.competition_id, f.season_id, f.home)
            .await
            .unwrap();
        assert!(matches!(
            withdraw_team(&f.state, f.competition_id, f.season_id, f.home).await,
            Err(ServiceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn game_requires_distinct_enrolled_teams() {
        let f = fixture().await;
        let same = create_game(&f.state, game_input(&f, f.home, f.home)).await;
        assert!(matches!(same, Err(ServiceError::InvalidInput(_))));

        let outsider = Uuid::new_v4();
        let unknown = create_game(&f.state, game_input(&f, f.home, outsider)).await;
        assert!(matches!(unknown, Err(ServiceError::InvalidInput(_))));

        let game = create_game(&f.state, game_input(&f, f.home, f.away))
            .await
            .unwrap();
        assert_eq!(game.kickoff, "2024-08-17T14:00:00Z");
        assert_eq!(game.home.name.as_deref(), Some("Arsenal"));
    }

    #[tokio::test]
    async fn goals_update_the_score_and_vanish_with_the_game() {
        let f = fixture().await;
        let game = create_game(&f.state, game_input(&f, f.home, f.away))
            .await
            .unwrap();
        let scorer = player(&f.state, "Saka").await;
        for side in [Side::Home, Side::Home, Side::Away] {
            add_goal(
                &f.state,
                game.id,
                GoalInput {
                    side,
                    minute: 10,
                    scorer_id: Some(scorer),
                    assist_id: None,
                    penalty: false,
                    own_goal: false,
                },
            )
            .await
            .unwrap();
        }

        let detail = game_service::get_game(&f.state, game.id).await.unwrap();
        assert_eq!((detail.game.score.home, detail.game.score.away), (2, 1));
        assert_eq!(detail.timeline.len(), 3);

        delete_game(&f.state, game.id).await.unwrap();
        let store = f.state.require_store().await.unwrap();
        assert!(store.goals_for_games(vec![game.id]).await.unwrap().is_empty());
        assert!(matches!(
            delete_game(&f.state, game.id).await,
            Err(ServiceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn unknown_scorer_is_rejected() {
        let f = fixture().await;
        let game = create_game(&f.state, game_input(&f, f.home, f.away))
            .await
            .unwrap();
        let result = add_goal(
            &f.state,
            game.id,
            GoalInput {
                side: Side::Away,
                minute: 3,
                scorer_id: Some(Uuid::new_v4()),
                assist_id: None,
                penalty: false,
                own_goal: false,
            },
        )
        .await;
        assert!(matches!(result, Err(ServiceError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn substitution_needs_two_players() {
        let f = fixture().await;
        let game = create_game(&f.state, game_input(&f, f.home, f.away))
            .await
            .unwrap();
        let rice = player(&f.state, "Rice").await;
        let result = add_substitution(
            &f.state,
            game.id,
            SubstitutionInput {
                side: Side::Home,
                minute: 60,
                player_in_id: rice,
                player_out_id: rice,
            },
        )
        .await;
        assert!(matches!(result, Err(ServiceError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn lineup_rejects_duplicate_players() {
        let f = fixture().await;
        let game = create_game(&f.state, game_input(&f, f.home, f.away))
            .await
            .unwrap();
        let odegaard = player(&f.state, "Odegaard").await;
        let entry = |starter| LineupEntryInput {
            player_id: odegaard,
            starter,
            position: None,
        };

        let duplicate = replace_lineup(
            &f.state,
            game.id,
            LineupInput {
                home: vec![entry(true)],
                away: vec![entry(true)],
            },
        )
        .await;
        assert!(matches!(duplicate, Err(ServiceError::InvalidInput(_))));

        let lineups = replace_lineup(
            &f.state,
            game.id,
            LineupInput {
                home: vec![entry(false)],
                away: Vec::new(),
            },
        )
        .await
        .unwrap();
        assert_eq!(lineups.home.len(), 1);
        assert_eq!(lineups.home[0].name.as_deref(), Some("Odegaard"));
    }

    #[tokio::test]
    async fn team_with_games_cannot_be_deleted() {
        let f = fixture().await;
        create_game(&f.state, game_input(&f, f.home, f.away))
            .await
            .unwrap();
        assert!(matches!(
            delete_team(&f.state, f.home).await,
            Err(ServiceError::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn competition_and_season_with_games_cannot_be_deleted() {
        let f = fixture().await;
        let game = create_game(&f.state, game_input(&f, f.home, f.away))
            .await
            .unwrap();

        assert!(matches!(
            delete_competition(&f.state, f.competition_id).await,
            Err(ServiceError::Conflict(_))
        ));
        assert!(matches!(
            delete_season(&f.state, f.season_id).await,
            Err(ServiceError::Conflict(_))
        ));
        let store = f.state.require_store().await.unwrap();
        assert!(store.find_game(game.id).await.unwrap().is_some());

        delete_game(&f.state, game.id).await.unwrap();
        delete_competition(&f.state, f.competition_id).await.unwrap();
        delete_season(&f.state, f.season_id).await.unwrap();
        delete_team(&f.state, f.home).await.unwrap();
    }

    #[tokio::test]
    async fn team_with_games_in_the_season_cannot_be_withdrawn() {
        let f = fixture().await;
        let game = create_game(&f.state, game_input(&f, f.home, f.away))
            .await
            .unwrap();
        assert!(matches!(
            withdraw_team(&f.state, f.competition_id, f.season_id, f.away).await,
            Err(ServiceError::Conflict(_))
        ));

        delete_game(&f.state, game.id).await.unwrap();
        withdraw_team(&f.state, f.competition_id, f.season_id, f.away)
            .await
            .unwrap();
    }
}
