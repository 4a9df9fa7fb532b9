//! League table assembly for one competition-season.

use std::collections::HashMap;

use futures::try_join;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::{
    dao::models::GameFilter,
    dto::standings::{StandingsResponse, StandingsRowDto},
    error::ServiceError,
    services::catalogue_service,
    standings::{compute_standings, outcomes_from_goals},
    state::SharedState,
};

/// Build the table from the enrolled teams and every recorded goal of the competition-season.
pub async fn league_table(
    state: &SharedState,
    competition_id: Uuid,
    season_id: Uuid,
) -> Result<StandingsResponse, ServiceError> {
    let (competition, season) =
        catalogue_service::competition_season(state, competition_id, season_id).await?;
    let store = state.require_store().await?;

    let goal_feed = {
        let store = store.clone();
        async move {
            let games = store
                .list_games(GameFilter::competition_season(competition_id, season_id))
                .await?;
            let game_ids = games.iter().map(|game| game.id).collect();
            let goals = store.goals_for_games(game_ids).await?;
            Ok::<_, ServiceError>((games, goals))
        }
    };
    let (mut roster, (games, goals)) = try_join!(
        async {
            store
                .enrolled_teams(competition_id, season_id)
                .await
                .map_err(ServiceError::from)
        },
        goal_feed,
    )?;

    roster.sort_by(|a, b| a.name.cmp(&b.name));
    let outcomes = outcomes_from_goals(&games, &goals);
    let table = compute_standings(roster.iter().map(|team| team.id), &outcomes);
    debug!(
        %competition_id,
        %season_id,
        teams = table.rows.len(),
        games = outcomes.len(),
        "computed league table"
    );
    if !table.unknown_team_ids.is_empty() {
        warn!(
            %competition_id,
            %season_id,
            unknown = ?table.unknown_team_ids,
            "games reference teams outside the competition-season roster"
        );
    }

    let names: HashMap<Uuid, String> = roster.into_iter().map(|t| (t.id, t.name)).collect();
    let rows = table
        .rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let name = names.get(&row.team_id).cloned().unwrap_or_default();
            StandingsRowDto::new(index + 1, row, name)
        })
        .collect();

    Ok(StandingsResponse {
        competition: competition.into(),
        season: season.into(),
        rows,
        unknown_team_ids: table.unknown_team_ids,
    })
}
