//! Fixture listings and the match centre: score, timeline and lineups.

use std::collections::HashMap;

use futures::try_join;
use uuid::Uuid;

use crate::{
    dao::{
        football_store::FootballStore,
        models::{
            CardEntity, GameEntity, GameFilter, GoalEntity, LineupEntryEntity, SubstitutionEntity,
        },
    },
    dto::game::{GameDetail, GameSummary, LineupPlayer, Lineups, Score, TeamRef, TimelineEvent},
    error::ServiceError,
    services::{catalogue_service, not_found},
    state::SharedState,
};

/// Attach team names and scores to `games`, keeping their order.
pub(crate) async fn summarize_games(
    store: &dyn FootballStore,
    games: Vec<GameEntity>,
) -> Result<Vec<GameSummary>, ServiceError> {
    if games.is_empty() {
        return Ok(Vec::new());
    }
    let game_ids = games.iter().map(|game| game.id).collect();
    let (teams, goals) = try_join!(store.list_teams(), store.goals_for_games(game_ids))?;

    let names: HashMap<Uuid, String> = teams.into_iter().map(|t| (t.id, t.name)).collect();
    let mut goals_by_game: HashMap<Uuid, Vec<GoalEntity>> = HashMap::new();
    for goal in goals {
        goals_by_game.entry(goal.game_id).or_default().push(goal);
    }

    Ok(games
        .into_iter()
        .map(|game| {
            let score = goals_by_game
                .get(&game.id)
                .map(|goals| Score::from_goals(goals))
                .unwrap_or_default();
            let home = team_ref(&names, game.home_team_id);
            let away = team_ref(&names, game.away_team_id);
            GameSummary::new(game, home, away, score)
        })
        .collect())
}

fn team_ref(names: &HashMap<Uuid, String>, id: Uuid) -> TeamRef {
    TeamRef {
        id,
        name: names.get(&id).cloned(),
    }
}

/// Games of a competition-season ordered by kick-off.
pub async fn list_games(
    state: &SharedState,
    competition_id: Uuid,
    season_id: Uuid,
) -> Result<Vec<GameSummary>, ServiceError> {
    catalogue_service::competition_season(state, competition_id, season_id).await?;
    let store = state.require_store().await?;
    let mut games = store
        .list_games(GameFilter::competition_season(competition_id, season_id))
        .await?;
    games.sort_by_key(|game| game.kickoff);
    summarize_games(store.as_ref(), games).await
}

/// Game with its score, merged timeline and both lineups.
pub async fn get_game(state: &SharedState, id: Uuid) -> Result<GameDetail, ServiceError> {
    let store = state.require_store().await?;
    let game = store
        .find_game(id)
        .await?
        .ok_or_else(|| not_found("game", id))?;

    let (goals, cards, substitutions, lineup, players) = try_join!(
        store.goals_for_games(vec![id]),
        store.cards_for_game(id),
        store.substitutions_for_game(id),
        store.lineup_for_game(id),
        store.list_players(None),
    )?;

    let player_names: HashMap<Uuid, String> =
        players.into_iter().map(|p| (p.id, p.name)).collect();
    let lineups = build_lineups(&lineup, &player_names);
    let timeline = build_timeline(goals, cards, substitutions);

    let mut summaries = summarize_games(store.as_ref(), vec![game]).await?;
    let game = summaries
        .pop()
        .ok_or_else(|| not_found("game", id))?;

    Ok(GameDetail {
        game,
        timeline,
        lineups,
    })
}

/// Merge match events ordered by minute; within a minute goals come first, then cards, then substitutions.
pub fn build_timeline(
    mut goals: Vec<GoalEntity>,
    mut cards: Vec<CardEntity>,
    mut substitutions: Vec<SubstitutionEntity>,
) -> Vec<TimelineEvent> {
    goals.sort_by_key(|goal| goal.minute);
    cards.sort_by_key(|card| card.minute);
    substitutions.sort_by_key(|sub| sub.minute);

    let mut timeline: Vec<TimelineEvent> = goals
        .into_iter()
        .map(TimelineEvent::from)
        .chain(cards.into_iter().map(TimelineEvent::from))
        .chain(substitutions.into_iter().map(TimelineEvent::from))
        .collect();
    timeline.sort_by_key(TimelineEvent::minute);
    timeline
}

/// Split a lineup per side, starters first, substitutes after.
pub fn build_lineups(entries: &[LineupEntryEntity], names: &HashMap<Uuid, String>) -> Lineups {
    let mut lineups = Lineups::default();
    for entry in entries {
        let player = LineupPlayer::new(entry, names.get(&entry.player_id).cloned());
        if entry.home {
            lineups.home.push(player);
        } else {
            lineups.away.push(player);
        }
    }
    lineups.home.sort_by_key(|player| !player.starter);
    lineups.away.sort_by_key(|player| !player.starter);
    lineups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dao::models::{CardColourEntity, PositionEntity};

    fn goal(minute: u8, home: bool) -> GoalEntity {
        GoalEntity {
            id: Uuid::new_v4(),
            game_id: Uuid::nil(),
            home,
            minute,
            scorer_id: None,
            assist_id: None,
            penalty: false,
            own_goal: false,
        }
    }

    fn card(minute: u8) -> CardEntity {
        CardEntity {
            id: Uuid::new_v4(),
            game_id: Uuid::nil(),
            player_id: Uuid::new_v4(),
            home: true,
            minute,
            colour: CardColourEntity::Yellow,
        }
    }

    fn substitution(minute: u8) -> SubstitutionEntity {
        SubstitutionEntity {
            id: Uuid::new_v4(),
            game_id: Uuid::nil(),
            home: false,
            minute,
            player_in_id: Uuid::new_v4(),
            player_out_id: Uuid::new_v4(),
        }
    }

    fn kind(event: &TimelineEvent) -> &'static str {
        match event {
            TimelineEvent::Goal { .. } => "goal",
            TimelineEvent::Card { .. } => "card",
            TimelineEvent::Substitution { .. } => "sub",
        }
    }

    #[test]
    fn timeline_is_ordered_by_minute() {
        let timeline = build_timeline(
            vec![goal(80, true), goal(12, false)],
            vec![card(45)],
            vec![substitution(60)],
        );
        let minutes: Vec<u8> = timeline.iter().map(TimelineEvent::minute).collect();
        assert_eq!(minutes, [12, 45, 60, 80]);
    }

    #[test]
    fn same_minute_events_put_goals_before_cards_before_substitutions() {
        let timeline = build_timeline(vec![goal(70, true)], vec![card(70)], vec![substitution(70)]);
        let kinds: Vec<_> = timeline.iter().map(kind).collect();
        assert_eq!(kinds, ["goal", "card", "sub"]);

        let timeline = build_timeline(vec![goal(70, true)], vec![card(10)], vec![substitution(70)]);
        let kinds: Vec<_> = timeline.iter().map(kind).collect();
        assert_eq!(kinds, ["card", "goal", "sub"]);
    }

    #[test]
    fn lineups_list_starters_first_per_side() {
        let bench = Uuid::new_v4();
        let keeper = Uuid::new_v4();
        let visitor = Uuid::new_v4();
        let entries = vec![
            LineupEntryEntity {
                game_id: Uuid::nil(),
                player_id: bench,
                home: true,
                starter: false,
                position: None,
            },
            LineupEntryEntity {
                game_id: Uuid::nil(),
                player_id: keeper,
                home: true,
                starter: true,
                position: Some(PositionEntity::Goalkeeper),
            },
            LineupEntryEntity {
                game_id: Uuid::nil(),
                player_id: visitor,
                home: false,
                starter: true,
                position: None,
            },
        ];
        let names = HashMap::from([(keeper, "Raya".to_string())]);

        let lineups = build_lineups(&entries, &names);

        assert_eq!(lineups.home[0].player_id, keeper);
        assert_eq!(lineups.home[0].name.as_deref(), Some("Raya"));
        assert_eq!(lineups.home[1].player_id, bench);
        assert_eq!(lineups.home[1].name, None);
        assert_eq!(lineups.away.len(), 1);
    }
}
