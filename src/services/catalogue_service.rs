//! Read-only catalogue projections: competitions, seasons, teams, players and managers.

use std::cmp::Reverse;

use futures::try_join;
use uuid::Uuid;

use crate::{
    dao::models::{CompetitionEntity, GameFilter, SeasonEntity},
    dto::catalogue::{
        CompetitionSummary, ManagerSummary, PlayerSummary, SeasonSummary, TeamDetail, TeamSummary,
    },
    error::ServiceError,
    services::{game_service, not_found},
    state::SharedState,
};

fn sorted_by_name<T, S>(items: Vec<T>, name: impl Fn(&S) -> &str) -> Vec<S>
where
    S: From<T>,
{
    let mut out: Vec<S> = items.into_iter().map(S::from).collect();
    out.sort_by(|a, b| name(a).cmp(name(b)));
    out
}

/// Competitions sorted by name.
pub async fn list_competitions(
    state: &SharedState,
) -> Result<Vec<CompetitionSummary>, ServiceError> {
    let store = state.require_store().await?;
    let competitions = store.list_competitions().await?;
    Ok(sorted_by_name(competitions, |c: &CompetitionSummary| c.name.as_str()))
}

/// One competition, 404 when unknown.
pub async fn get_competition(
    state: &SharedState,
    id: Uuid,
) -> Result<CompetitionSummary, ServiceError> {
    let store = state.require_store().await?;
    store
        .find_competition(id)
        .await?
        .map(Into::into)
        .ok_or_else(|| not_found("competition", id))
}

/// Seasons sorted by name.
pub async fn list_seasons(state: &SharedState) -> Result<Vec<SeasonSummary>, ServiceError> {
    let store = state.require_store().await?;
    let seasons = store.list_seasons().await?;
    Ok(sorted_by_name(seasons, |s: &SeasonSummary| s.name.as_str()))
}

/// One season, 404 when unknown.
pub async fn get_season(state: &SharedState, id: Uuid) -> Result<SeasonSummary, ServiceError> {
    let store = state.require_store().await?;
    store
        .find_season(id)
        .await?
        .map(Into::into)
        .ok_or_else(|| not_found("season", id))
}

/// Teams sorted by name.
pub async fn list_teams(state: &SharedState) -> Result<Vec<TeamSummary>, ServiceError> {
    let store = state.require_store().await?;
    let teams = store.list_teams().await?;
    Ok(sorted_by_name(teams, |t: &TeamSummary| t.name.as_str()))
}

/// Team page with squad, managers and the latest games, newest first.
pub async fn get_team(state: &SharedState, id: Uuid) -> Result<TeamDetail, ServiceError> {
    let store = state.require_store().await?;
    let (team, players, managers, mut games) = try_join!(
        store.find_team(id),
        store.list_players(Some(id)),
        store.list_managers(Some(id)),
        store.list_games(GameFilter::team(id)),
    )?;
    let team = team.ok_or_else(|| not_found("team", id))?;

    games.sort_by_key(|game| Reverse(game.kickoff));
    games.truncate(state.config().recent_games_limit());
    let recent_games = game_service::summarize_games(store.as_ref(), games).await?;

    Ok(TeamDetail {
        team: team.into(),
        players: sorted_by_name(players, |p: &PlayerSummary| p.name.as_str()),
        managers: sorted_by_name(managers, |m: &ManagerSummary| m.name.as_str()),
        recent_games,
    })
}

/// Players sorted by name, optionally limited to one team.
pub async fn list_players(
    state: &SharedState,
    team_id: Option<Uuid>,
) -> Result<Vec<PlayerSummary>, ServiceError> {
    let store = state.require_store().await?;
    let players = store.list_players(team_id).await?;
    Ok(sorted_by_name(players, |p: &PlayerSummary| p.name.as_str()))
}

/// One player, 404 when unknown.
pub async fn get_player(state: &SharedState, id: Uuid) -> Result<PlayerSummary, ServiceError> {
    let store = state.require_store().await?;
    store
        .find_player(id)
        .await?
        .map(Into::into)
        .ok_or_else(|| not_found("player", id))
}

/// Managers sorted by name, optionally limited to one team.
pub async fn list_managers(
    state: &SharedState,
    team_id: Option<Uuid>,
) -> Result<Vec<ManagerSummary>, ServiceError> {
    let store = state.require_store().await?;
    let managers = store.list_managers(team_id).await?;
    Ok(sorted_by_name(managers, |m: &ManagerSummary| m.name.as_str()))
}

/// One manager, 404 when unknown.
pub async fn get_manager(state: &SharedState, id: Uuid) -> Result<ManagerSummary, ServiceError> {
    let store = state.require_store().await?;
    store
        .find_manager(id)
        .await?
        .map(Into::into)
        .ok_or_else(|| not_found("manager", id))
}

/// Resolve a competition-season pair, failing with 404 semantics when either side is unknown.
pub(crate) async fn competition_season(
    state: &SharedState,
    competition_id: Uuid,
    season_id: Uuid,
) -> Result<(CompetitionEntity, SeasonEntity), ServiceError> {
    let store = state.require_store().await?;
    let (competition, season) = try_join!(
        store.find_competition(competition_id),
        store.find_season(season_id)
    )?;
    let competition = competition.ok_or_else(|| not_found("competition", competition_id))?;
    let season = season.ok_or_else(|| not_found("season", season_id))?;
    Ok((competition, season))
}

/// Teams enrolled in a competition-season, sorted by name.
pub async fn enrolled_teams(
    state: &SharedState,
    competition_id: Uuid,
    season_id: Uuid,
) -> Result<Vec<TeamSummary>, ServiceError> {
    competition_season(state, competition_id, season_id).await?;
    let store = state.require_store().await?;
    let teams = store.enrolled_teams(competition_id, season_id).await?;
    Ok(sorted_by_name(teams, |t: &TeamSummary| t.name.as_str()))
}

#[cfg(test)]
mod tests {
    use std::{
        sync::Arc,
        time::{Duration, SystemTime},
    };

    use super::*;
    use crate::{
        config::AppConfig,
        dao::{
            football_store::{FootballStore, memory::MemoryFootballStore},
            models::{EnrollmentEntity, GameEntity, PlayerEntity, PositionEntity, TeamEntity},
        },
        state::AppState,
    };

    fn team(name: &str) -> TeamEntity {
        TeamEntity {
            id: Uuid::new_v4(),
            name: name.into(),
            short_name: None,
            founded: None,
            stadium: None,
        }
    }

    #[tokio::test]
    async fn teams_are_listed_by_name() {
        let store = Arc::new(MemoryFootballStore::new());
        for name in ["Wolves", "Arsenal", "Chelsea"] {
            store.save_team(team(name)).await.unwrap();
        }
        let state = AppState::with_store(AppConfig::default(), store).await;

        let names: Vec<_> = list_teams(&state)
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, ["Arsenal", "Chelsea", "Wolves"]);
    }

    #[tokio::test]
    async fn team_detail_keeps_latest_games_only() {
        let store = Arc::new(MemoryFootballStore::new());
        let home = team("Arsenal");
        let away = team("Chelsea");
        store.save_team(home.clone()).await.unwrap();
        store.save_team(away.clone()).await.unwrap();
        store
            .save_player(PlayerEntity {
                id: Uuid::new_v4(),
                name: "Saka".into(),
                position: PositionEntity::Forward,
                nationality: None,
                shirt_number: Some(7),
                team_id: Some(home.id),
            })
            .await
            .unwrap();

        let base = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let mut ids = Vec::new();
        for day in 0..7u64 {
            let game = GameEntity {
                id: Uuid::new_v4(),
                competition_id: Uuid::new_v4(),
                season_id: Uuid::new_v4(),
                home_team_id: home.id,
                away_team_id: away.id,
                kickoff: base + Duration::from_secs(day * 86_400),
                venue: None,
            };
            ids.push(game.id);
            store.save_game(game).await.unwrap();
        }

        let state = AppState::with_store(AppConfig::default(), store).await;
        let detail = get_team(&state, home.id).await.unwrap();

        assert_eq!(detail.players.len(), 1);
        assert_eq!(detail.recent_games.len(), 5);
        assert_eq!(detail.recent_games[0].id, ids[6]);
        assert_eq!(detail.recent_games[0].home.name.as_deref(), Some("Arsenal"));
    }

    #[tokio::test]
    async fn enrolled_teams_require_known_competition() {
        let store = Arc::new(MemoryFootballStore::new());
        let state = AppState::with_store(AppConfig::default(), store.clone()).await;

        let err = enrolled_teams(&state, Uuid::new_v4(), Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));

        let competition = CompetitionEntity {
            id: Uuid::new_v4(),
            name: "Premier League".into(),
            country: Some("England".into()),
        };
        let season = SeasonEntity {
            id: Uuid::new_v4(),
            name: "2023/24".into(),
        };
        let arsenal = team("Arsenal");
        store.save_competition(competition.clone()).await.unwrap();
        store.save_season(season.clone()).await.unwrap();
        store.save_team(arsenal.clone()).await.unwrap();
        store
            .enroll_team(EnrollmentEntity {
                competition_id: competition.id,
                season_id: season.id,
                team_id: arsenal.id,
            })
            .await
            .unwrap();

        let teams = enrolled_teams(&state, competition.id, season.id)
            .await
            .unwrap();
        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].id, arsenal.id);
    }
}
