//! In-process store backed by concurrent maps. Used for local runs and tests.

use std::sync::Arc;

use dashmap::{DashMap, DashSet, mapref::entry::Entry};
use futures::future::{BoxFuture, ready};
use uuid::Uuid;

use super::{FootballStore, name_matches};
use crate::dao::{
    models::{
        CardEntity, CompetitionEntity, EnrollmentEntity, FavouriteEntity, FavouriteKindEntity,
        GameEntity, GameFilter, GoalEntity, LineupEntryEntity, ManagerEntity, PlayerEntity,
        SearchHitsEntity, SeasonEntity, SubstitutionEntity, TeamEntity,
    },
    storage::StorageResult,
};

type FavouriteKey = (String, FavouriteKindEntity, Uuid);

#[derive(Default)]
struct MemoryInner {
    competitions: DashMap<Uuid, CompetitionEntity>,
    seasons: DashMap<Uuid, SeasonEntity>,
    teams: DashMap<Uuid, TeamEntity>,
    players: DashMap<Uuid, PlayerEntity>,
    managers: DashMap<Uuid, ManagerEntity>,
    enrollments: DashSet<EnrollmentEntity>,
    games: DashMap<Uuid, GameEntity>,
    goals: DashMap<Uuid, GoalEntity>,
    cards: DashMap<Uuid, CardEntity>,
    substitutions: DashMap<Uuid, SubstitutionEntity>,
    lineups: DashMap<Uuid, Vec<LineupEntryEntity>>,
    favourites: DashMap<FavouriteKey, FavouriteEntity>,
}

/// [`FootballStore`] keeping everything in memory for the lifetime of the process.
#[derive(Clone, Default)]
pub struct MemoryFootballStore {
    inner: Arc<MemoryInner>,
}

impl MemoryFootballStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn done<T: Send + 'static>(value: T) -> BoxFuture<'static, StorageResult<T>> {
    Box::pin(ready(Ok(value)))
}

fn values<T: Clone>(map: &DashMap<Uuid, T>) -> Vec<T> {
    map.iter().map(|entry| entry.value().clone()).collect()
}

fn get<T: Clone>(map: &DashMap<Uuid, T>, id: Uuid) -> Option<T> {
    map.get(&id).map(|entry| entry.value().clone())
}

fn values_where<T: Clone>(map: &DashMap<Uuid, T>, keep: impl Fn(&T) -> bool) -> Vec<T> {
    map.iter()
        .filter(|entry| keep(entry.value()))
        .map(|entry| entry.value().clone())
        .collect()
}

/// Entries whose name contains `needle`, alphabetically, capped at `limit`.
fn first_by_name<T: Clone>(
    map: &DashMap<Uuid, T>,
    needle: &str,
    limit: usize,
    name: impl Fn(&T) -> &str,
) -> Vec<T> {
    let mut hits = values_where(map, |value| name_matches(name(value), needle));
    hits.sort_by(|a, b| name(a).cmp(name(b)));
    hits.truncate(limit);
    hits
}

impl FootballStore for MemoryFootballStore {
    fn list_competitions(&self) -> BoxFuture<'static, StorageResult<Vec<CompetitionEntity>>> {
        done(values(&self.inner.competitions))
    }

    fn find_competition(
        &self,
        id: Uuid,
    ) -> BoxFuture<'static, StorageResult<Option<CompetitionEntity>>> {
        done(get(&self.inner.competitions, id))
    }

    fn save_competition(
        &self,
        competition: CompetitionEntity,
    ) -> BoxFuture<'static, StorageResult<()>> {
        self.inner.competitions.insert(competition.id, competition);
        done(())
    }

    fn delete_competition(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>> {
        let removed = self.inner.competitions.remove(&id).is_some();
        if removed {
            self.inner
                .enrollments
                .retain(|enrollment| enrollment.competition_id != id);
        }
        done(removed)
    }

    fn list_seasons(&self) -> BoxFuture<'static, StorageResult<Vec<SeasonEntity>>> {
        done(values(&self.inner.seasons))
    }

    fn find_season(&self, id: Uuid) -> BoxFuture<'static, StorageResult<Option<SeasonEntity>>> {
        done(get(&self.inner.seasons, id))
    }

    fn save_season(&self, season: SeasonEntity) -> BoxFuture<'static, StorageResult<()>> {
        self.inner.seasons.insert(season.id, season);
        done(())
    }

    fn delete_season(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>> {
        let removed = self.inner.seasons.remove(&id).is_some();
        if removed {
            self.inner
                .enrollments
                .retain(|enrollment| enrollment.season_id != id);
        }
        done(removed)
    }

    fn list_teams(&self) -> BoxFuture<'static, StorageResult<Vec<TeamEntity>>> {
        done(values(&self.inner.teams))
    }

    fn find_team(&self, id: Uuid) -> BoxFuture<'static, StorageResult<Option<TeamEntity>>> {
        done(get(&self.inner.teams, id))
    }

    fn save_team(&self, team: TeamEntity) -> BoxFuture<'static, StorageResult<()>> {
        self.inner.teams.insert(team.id, team);
        done(())
    }

    fn delete_team(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>> {
        let removed = self.inner.teams.remove(&id).is_some();
        if removed {
            self.inner
                .enrollments
                .retain(|enrollment| enrollment.team_id != id);
        }
        done(removed)
    }

    fn list_players(
        &self,
        team_id: Option<Uuid>,
    ) -> BoxFuture<'static, StorageResult<Vec<PlayerEntity>>> {
        done(values_where(&self.inner.players, |player| {
            team_id.is_none_or(|id| player.team_id == Some(id))
        }))
    }

    fn find_player(&self, id: Uuid) -> BoxFuture<'static, StorageResult<Option<PlayerEntity>>> {
        done(get(&self.inner.players, id))
    }

    fn save_player(&self, player: PlayerEntity) -> BoxFuture<'static, StorageResult<()>> {
        self.inner.players.insert(player.id, player);
        done(())
    }

    fn delete_player(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>> {
        done(self.inner.players.remove(&id).is_some())
    }

    fn list_managers(
        &self,
        team_id: Option<Uuid>,
    ) -> BoxFuture<'static, StorageResult<Vec<ManagerEntity>>> {
        done(values_where(&self.inner.managers, |manager| {
            team_id.is_none_or(|id| manager.team_id == Some(id))
        }))
    }

    fn find_manager(&self, id: Uuid) -> BoxFuture<'static, StorageResult<Option<ManagerEntity>>> {
        done(get(&self.inner.managers, id))
    }

    fn save_manager(&self, manager: ManagerEntity) -> BoxFuture<'static, StorageResult<()>> {
        self.inner.managers.insert(manager.id, manager);
        done(())
    }

    fn delete_manager(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>> {
        done(self.inner.managers.remove(&id).is_some())
    }

    fn enrolled_teams(
        &self,
        competition_id: Uuid,
        season_id: Uuid,
    ) -> BoxFuture<'static, StorageResult<Vec<TeamEntity>>> {
        let teams = self
            .inner
            .enrollments
            .iter()
            .filter(|e| e.competition_id == competition_id && e.season_id == season_id)
            .filter_map(|e| get(&self.inner.teams, e.team_id))
            .collect();
        done(teams)
    }

    fn enroll_team(&self, enrollment: EnrollmentEntity) -> BoxFuture<'static, StorageResult<bool>> {
        done(self.inner.enrollments.insert(enrollment))
    }

    fn withdraw_team(
        &self,
        enrollment: EnrollmentEntity,
    ) -> BoxFuture<'static, StorageResult<bool>> {
        done(self.inner.enrollments.remove(&enrollment).is_some())
    }

    fn list_games(&self, filter: GameFilter) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>> {
        done(values_where(&self.inner.games, |game| filter.matches(game)))
    }

    fn find_game(&self, id: Uuid) -> BoxFuture<'static, StorageResult<Option<GameEntity>>> {
        done(get(&self.inner.games, id))
    }

    fn save_game(&self, game: GameEntity) -> BoxFuture<'static, StorageResult<()>> {
        self.inner.games.insert(game.id, game);
        done(())
    }

    fn delete_game(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>> {
        let removed = self.inner.games.remove(&id).is_some();
        if removed {
            self.inner.goals.retain(|_, goal| goal.game_id != id);
            self.inner.cards.retain(|_, card| card.game_id != id);
            self.inner.substitutions.retain(|_, sub| sub.game_id != id);
            self.inner.lineups.remove(&id);
        }
        done(removed)
    }

    fn goals_for_games(
        &self,
        game_ids: Vec<Uuid>,
    ) -> BoxFuture<'static, StorageResult<Vec<GoalEntity>>> {
        done(values_where(&self.inner.goals, |goal| {
            game_ids.contains(&goal.game_id)
        }))
    }

    fn save_goal(&self, goal: GoalEntity) -> BoxFuture<'static, StorageResult<()>> {
        self.inner.goals.insert(goal.id, goal);
        done(())
    }

    fn delete_goal(&self, game_id: Uuid, id: Uuid) -> BoxFuture<'static, StorageResult<bool>> {
        done(
            self.inner
                .goals
                .remove_if(&id, |_, goal| goal.game_id == game_id)
                .is_some(),
        )
    }

    fn cards_for_game(&self, game_id: Uuid) -> BoxFuture<'static, StorageResult<Vec<CardEntity>>> {
        done(values_where(&self.inner.cards, |card| {
            card.game_id == game_id
        }))
    }

    fn save_card(&self, card: CardEntity) -> BoxFuture<'static, StorageResult<()>> {
        self.inner.cards.insert(card.id, card);
        done(())
    }

    fn delete_card(&self, game_id: Uuid, id: Uuid) -> BoxFuture<'static, StorageResult<bool>> {
        done(
            self.inner
                .cards
                .remove_if(&id, |_, card| card.game_id == game_id)
                .is_some(),
        )
    }

    fn substitutions_for_game(
        &self,
        game_id: Uuid,
    ) -> BoxFuture<'static, StorageResult<Vec<SubstitutionEntity>>> {
        done(values_where(&self.inner.substitutions, |sub| {
            sub.game_id == game_id
        }))
    }

    fn save_substitution(
        &self,
        substitution: SubstitutionEntity,
    ) -> BoxFuture<'static, StorageResult<()>> {
        self.inner
            .substitutions
            .insert(substitution.id, substitution);
        done(())
    }

    fn delete_substitution(
        &self,
        game_id: Uuid,
        id: Uuid,
    ) -> BoxFuture<'static, StorageResult<bool>> {
        done(
            self.inner
                .substitutions
                .remove_if(&id, |_, sub| sub.game_id == game_id)
                .is_some(),
        )
    }

    fn lineup_for_game(
        &self,
        game_id: Uuid,
    ) -> BoxFuture<'static, StorageResult<Vec<LineupEntryEntity>>> {
        done(
            self.inner
                .lineups
                .get(&game_id)
                .map(|entry| entry.value().clone())
                .unwrap_or_default(),
        )
    }

    fn replace_lineup(
        &self,
        game_id: Uuid,
        entries: Vec<LineupEntryEntity>,
    ) -> BoxFuture<'static, StorageResult<()>> {
        self.inner.lineups.insert(game_id, entries);
        done(())
    }

    fn search(
        &self,
        query: String,
        limit: usize,
    ) -> BoxFuture<'static, StorageResult<SearchHitsEntity>> {
        let needle = query.to_lowercase();
        let hits = SearchHitsEntity {
            competitions: first_by_name(&self.inner.competitions, &needle, limit, |c| {
                c.name.as_str()
            }),
            teams: first_by_name(&self.inner.teams, &needle, limit, |t| t.name.as_str()),
            players: first_by_name(&self.inner.players, &needle, limit, |p| p.name.as_str()),
            managers: first_by_name(&self.inner.managers, &needle, limit, |m| m.name.as_str()),
        };
        done(hits)
    }

    fn list_favourites(
        &self,
        user_id: String,
    ) -> BoxFuture<'static, StorageResult<Vec<FavouriteEntity>>> {
        let favourites = self
            .inner
            .favourites
            .iter()
            .filter(|entry| entry.value().user_id == user_id)
            .map(|entry| entry.value().clone())
            .collect();
        done(favourites)
    }

    fn save_favourite(&self, favourite: FavouriteEntity) -> BoxFuture<'static, StorageResult<bool>> {
        let key = (
            favourite.user_id.clone(),
            favourite.kind,
            favourite.target_id,
        );
        let inserted = match self.inner.favourites.entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(favourite);
                true
            }
        };
        done(inserted)
    }

    fn delete_favourite(
        &self,
        user_id: String,
        kind: FavouriteKindEntity,
        target_id: Uuid,
    ) -> BoxFuture<'static, StorageResult<bool>> {
        done(
            self.inner
                .favourites
                .remove(&(user_id, kind, target_id))
                .is_some(),
        )
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        done(())
    }

    fn try_reconnect(&self) -> BoxFuture<'static, StorageResult<()>> {
        done(())
    }
}
