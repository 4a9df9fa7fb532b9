//! League table aggregation for one competition-season.
//!
//! The calculation is a pure function of the enrolled roster and the per-game
//! outcomes; fetching both is left to the service layer.

use std::collections::HashMap;

use indexmap::IndexSet;
use uuid::Uuid;

use crate::dao::models::{GameEntity, GoalEntity};

/// Points awarded for a win.
pub const POINTS_PER_WIN: u32 = 3;
/// Points awarded for a draw.
pub const POINTS_PER_DRAW: u32 = 1;

/// Which side, if any, won a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    /// Home side scored more.
    Home,
    /// Away side scored more.
    Away,
    /// Equal goal counts, 0-0 included.
    Draw,
}

/// Final tally of a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    /// Game the tally belongs to.
    pub game_id: Uuid,
    /// Team playing at home.
    pub home_team_id: Uuid,
    /// Visiting team.
    pub away_team_id: Uuid,
    /// Goals credited to the home side.
    pub home_goals: u32,
    /// Goals credited to the away side.
    pub away_goals: u32,
}

impl GameOutcome {
    /// Classify the result by comparing goal counts.
    pub fn winner(&self) -> Winner {
        match self.home_goals.cmp(&self.away_goals) {
            std::cmp::Ordering::Greater => Winner::Home,
            std::cmp::Ordering::Less => Winner::Away,
            std::cmp::Ordering::Equal => Winner::Draw,
        }
    }
}

/// One line of the league table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandingsRow {
    /// Enrolled team the row describes.
    pub team_id: Uuid,
    /// Games the team appeared in, home or away.
    pub played: u32,
    /// Games won.
    pub wins: u32,
    /// Games lost.
    pub losses: u32,
    /// Three per win, one per draw.
    pub points: u32,
}

impl StandingsRow {
    fn empty(team_id: Uuid) -> Self {
        Self {
            team_id,
            played: 0,
            wins: 0,
            losses: 0,
            points: 0,
        }
    }

    /// Games that ended level.
    pub fn draws(&self) -> u32 {
        self.played - self.wins - self.losses
    }

    fn record(&mut self, won: bool, lost: bool) {
        self.played += 1;
        if won {
            self.wins += 1;
            self.points += POINTS_PER_WIN;
        } else if lost {
            self.losses += 1;
        } else {
            self.points += POINTS_PER_DRAW;
        }
    }
}

/// Sorted table plus the teams seen in games but missing from the roster.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StandingsTable {
    /// One row per roster team, highest points first.
    pub rows: Vec<StandingsRow>,
    /// Ids referenced by game outcomes without a roster entry, in first-seen order.
    pub unknown_team_ids: Vec<Uuid>,
}

/// Fold a raw goal feed into one outcome per game.
///
/// Goals whose game is not in `games` are ignored. A game without goals is a 0-0.
pub fn outcomes_from_goals(games: &[GameEntity], goals: &[GoalEntity]) -> Vec<GameOutcome> {
    let mut tallies: HashMap<Uuid, (u32, u32)> = HashMap::with_capacity(games.len());
    for goal in goals {
        let tally = tallies.entry(goal.game_id).or_default();
        if goal.home {
            tally.0 += 1;
        } else {
            tally.1 += 1;
        }
    }

    games
        .iter()
        .map(|game| {
            let (home_goals, away_goals) = tallies.get(&game.id).copied().unwrap_or_default();
            GameOutcome {
                game_id: game.id,
                home_team_id: game.home_team_id,
                away_team_id: game.away_team_id,
                home_goals,
                away_goals,
            }
        })
        .collect()
}

/// Build the league table for `roster` from `outcomes`.
///
/// Every roster team gets exactly one row, even without games. Rows are ordered
/// by points only; the sort is stable so tied teams keep their roster order.
pub fn compute_standings<I>(roster: I, outcomes: &[GameOutcome]) -> StandingsTable
where
    I: IntoIterator<Item = Uuid>,
{
    let mut accumulators: HashMap<Uuid, StandingsRow> = HashMap::new();

    for outcome in outcomes {
        let winner = outcome.winner();
        accumulators
            .entry(outcome.home_team_id)
            .or_insert_with(|| StandingsRow::empty(outcome.home_team_id))
            .record(winner == Winner::Home, winner == Winner::Away);
        accumulators
            .entry(outcome.away_team_id)
            .or_insert_with(|| StandingsRow::empty(outcome.away_team_id))
            .record(winner == Winner::Away, winner == Winner::Home);
    }

    let mut seen = IndexSet::new();
    let mut rows = Vec::new();
    for team_id in roster {
        if !seen.insert(team_id) {
            continue;
        }
        rows.push(
            accumulators
                .get(&team_id)
                .copied()
                .unwrap_or_else(|| StandingsRow::empty(team_id)),
        );
    }

    let unknown_team_ids = outcomes
        .iter()
        .flat_map(|outcome| [outcome.home_team_id, outcome.away_team_id])
        .filter(|team_id| !seen.contains(team_id))
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect();

    rows.sort_by(|a, b| b.points.cmp(&a.points));

    StandingsTable {
        rows,
        unknown_team_ids,
    }
}

#[cfg(test)]
mod tests {
    use std::time::SystemTime;

    use super::*;

    fn outcome(home: Uuid, away: Uuid, home_goals: u32, away_goals: u32) -> GameOutcome {
        GameOutcome {
            game_id: Uuid::new_v4(),
            home_team_id: home,
            away_team_id: away,
            home_goals,
            away_goals,
        }
    }

    fn row(table: &StandingsTable, team_id: Uuid) -> StandingsRow {
        *table
            .rows
            .iter()
            .find(|row| row.team_id == team_id)
            .expect("team row present")
    }

    fn game(home: Uuid, away: Uuid) -> GameEntity {
        GameEntity {
            id: Uuid::new_v4(),
            competition_id: Uuid::nil(),
            season_id: Uuid::nil(),
            home_team_id: home,
            away_team_id: away,
            kickoff: SystemTime::UNIX_EPOCH,
            venue: None,
        }
    }

    fn goal(game_id: Uuid, home: bool) -> GoalEntity {
        GoalEntity {
            id: Uuid::new_v4(),
            game_id,
            home,
            minute: 10,
            scorer_id: None,
            assist_id: None,
            penalty: false,
            own_goal: false,
        }
    }

    #[test]
    fn every_roster_team_gets_one_row() {
        let teams = [Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()];
        let outcomes = [outcome(teams[0], teams[1], 1, 0)];

        let table = compute_standings(teams, &outcomes);

        assert_eq!(table.rows.len(), 3);
        for team in teams {
            assert_eq!(table.rows.iter().filter(|r| r.team_id == team).count(), 1);
        }
    }

    #[test]
    fn duplicate_roster_entries_collapse() {
        let a = Uuid::new_v4();
        let table = compute_standings([a, a], &[]);
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn home_win_credits_home_and_debits_away() {
        let (home, away) = (Uuid::new_v4(), Uuid::new_v4());
        let table = compute_standings([home, away], &[outcome(home, away, 2, 0)]);

        let h = row(&table, home);
        assert_eq!((h.played, h.wins, h.losses, h.points), (1, 1, 0, 3));
        let a = row(&table, away);
        assert_eq!((a.played, a.wins, a.losses, a.points), (1, 0, 1, 0));
    }

    #[test]
    fn away_win_is_symmetric() {
        let (home, away) = (Uuid::new_v4(), Uuid::new_v4());
        let table = compute_standings([home, away], &[outcome(home, away, 0, 1)]);

        assert_eq!(row(&table, away).points, 3);
        assert_eq!(row(&table, home).losses, 1);
        assert_eq!(table.rows[0].team_id, away);
    }

    #[test]
    fn draw_gives_one_point_each() {
        let (home, away) = (Uuid::new_v4(), Uuid::new_v4());
        let table = compute_standings([home, away], &[outcome(home, away, 1, 1)]);

        for team in [home, away] {
            let r = row(&table, team);
            assert_eq!((r.played, r.wins, r.losses, r.points), (1, 0, 0, 1));
            assert_eq!(r.draws(), 1);
        }
    }

    #[test]
    fn no_games_yields_all_zero_rows() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let table = compute_standings([a, b], &[]);

        assert_eq!(
            table.rows,
            vec![StandingsRow::empty(a), StandingsRow::empty(b)]
        );
        assert!(table.unknown_team_ids.is_empty());
    }

    #[test]
    fn empty_roster_and_games() {
        let table = compute_standings(Vec::new(), &[]);
        assert!(table.rows.is_empty());
        assert!(table.unknown_team_ids.is_empty());
    }

    #[test]
    fn three_team_round() {
        let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let outcomes = [
            outcome(a, b, 3, 1),
            outcome(b, c, 2, 2),
            outcome(c, a, 0, 1),
        ];

        let table = compute_standings([a, b, c], &outcomes);

        let ra = row(&table, a);
        assert_eq!((ra.played, ra.wins, ra.losses, ra.points), (2, 2, 0, 6));
        let rb = row(&table, b);
        assert_eq!((rb.played, rb.wins, rb.losses, rb.points), (2, 0, 1, 1));
        let rc = row(&table, c);
        assert_eq!((rc.played, rc.wins, rc.losses, rc.points), (2, 0, 1, 1));

        assert_eq!(table.rows[0].team_id, a);
        // stable sort keeps the roster order among tied teams
        assert_eq!(table.rows[1].team_id, b);
        assert_eq!(table.rows[2].team_id, c);
    }

    #[test]
    fn rows_satisfy_conservation_and_points_formula() {
        let teams: Vec<Uuid> = (0..4).map(|_| Uuid::new_v4()).collect();
        let mut outcomes = Vec::new();
        for (i, home) in teams.iter().enumerate() {
            for (j, away) in teams.iter().enumerate() {
                if i != j {
                    outcomes.push(outcome(*home, *away, (i as u32) % 3, (j as u32 + 1) % 3));
                }
            }
        }

        let table = compute_standings(teams.iter().copied(), &outcomes);

        for r in &table.rows {
            assert_eq!(r.played, 6);
            assert_eq!(r.played, r.wins + r.losses + r.draws());
            assert_eq!(r.points, 3 * r.wins + r.draws());
        }
        assert!(table.rows.windows(2).all(|w| w[0].points >= w[1].points));
    }

    #[test]
    fn unknown_teams_are_reported_not_ranked() {
        let (a, stranger) = (Uuid::new_v4(), Uuid::new_v4());
        let outcomes = [outcome(a, stranger, 0, 2), outcome(stranger, a, 1, 1)];

        let table = compute_standings([a], &outcomes);

        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.unknown_team_ids, vec![stranger]);
        let r = row(&table, a);
        assert_eq!((r.played, r.losses, r.points), (2, 1, 1));
    }

    #[test]
    fn goal_feed_is_counted_per_side() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let first = game(a, b);
        let goalless = game(b, a);
        let goals = vec![
            goal(first.id, true),
            goal(first.id, false),
            goal(first.id, true),
            goal(Uuid::new_v4(), true),
        ];

        let outcomes = outcomes_from_goals(&[first.clone(), goalless.clone()], &goals);

        assert_eq!(outcomes.len(), 2);
        assert_eq!((outcomes[0].home_goals, outcomes[0].away_goals), (2, 1));
        assert_eq!(outcomes[0].winner(), Winner::Home);
        assert_eq!(outcomes[1].game_id, goalless.id);
        assert_eq!(outcomes[1].winner(), Winner::Draw);
    }
}
