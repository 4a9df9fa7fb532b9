pub mod memory;
#[cfg(feature = "mongo-store")]
pub mod mongodb;

use crate::dao::models::{
    CardEntity, CompetitionEntity, EnrollmentEntity, FavouriteEntity, FavouriteKindEntity,
    GameEntity, GameFilter, GoalEntity, LineupEntryEntity, ManagerEntity, PlayerEntity,
    SearchHitsEntity, SeasonEntity, SubstitutionEntity, TeamEntity,
};
use crate::dao::storage::StorageResult;
use futures::future::BoxFuture;
use uuid::Uuid;

/// Abstraction over the persistence layer for the football catalogue, fixtures and events.
///
/// `delete_*` methods report whether something was removed. Listing order is
/// unspecified; callers sort for presentation.
pub trait FootballStore: Send + Sync {
    fn list_competitions(&self) -> BoxFuture<'static, StorageResult<Vec<CompetitionEntity>>>;
    fn find_competition(
        &self,
        id: Uuid,
    ) -> BoxFuture<'static, StorageResult<Option<CompetitionEntity>>>;
    fn save_competition(&self, competition: CompetitionEntity)
    -> BoxFuture<'static, StorageResult<()>>;
    fn delete_competition(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>>;

    fn list_seasons(&self) -> BoxFuture<'static, StorageResult<Vec<SeasonEntity>>>;
    fn find_season(&self, id: Uuid) -> BoxFuture<'static, StorageResult<Option<SeasonEntity>>>;
    fn save_season(&self, season: SeasonEntity) -> BoxFuture<'static, StorageResult<()>>;
    fn delete_season(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>>;

    fn list_teams(&self) -> BoxFuture<'static, StorageResult<Vec<TeamEntity>>>;
    fn find_team(&self, id: Uuid) -> BoxFuture<'static, StorageResult<Option<TeamEntity>>>;
    fn save_team(&self, team: TeamEntity) -> BoxFuture<'static, StorageResult<()>>;
    fn delete_team(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>>;

    fn list_players(
        &self,
        team_id: Option<Uuid>,
    ) -> BoxFuture<'static, StorageResult<Vec<PlayerEntity>>>;
    fn find_player(&self, id: Uuid) -> BoxFuture<'static, StorageResult<Option<PlayerEntity>>>;
    fn save_player(&self, player: PlayerEntity) -> BoxFuture<'static, StorageResult<()>>;
    fn delete_player(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>>;

    fn list_managers(
        &self,
        team_id: Option<Uuid>,
    ) -> BoxFuture<'static, StorageResult<Vec<ManagerEntity>>>;
    fn find_manager(&self, id: Uuid) -> BoxFuture<'static, StorageResult<Option<ManagerEntity>>>;
    fn save_manager(&self, manager: ManagerEntity) -> BoxFuture<'static, StorageResult<()>>;
    fn delete_manager(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>>;

    /// Teams enrolled in the given competition-season.
    fn enrolled_teams(
        &self,
        competition_id: Uuid,
        season_id: Uuid,
    ) -> BoxFuture<'static, StorageResult<Vec<TeamEntity>>>;
    /// Returns `false` when the enrollment already existed.
    fn enroll_team(&self, enrollment: EnrollmentEntity) -> BoxFuture<'static, StorageResult<bool>>;
    fn withdraw_team(&self, enrollment: EnrollmentEntity)
    -> BoxFuture<'static, StorageResult<bool>>;

    fn list_games(&self, filter: GameFilter) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>>;
    fn find_game(&self, id: Uuid) -> BoxFuture<'static, StorageResult<Option<GameEntity>>>;
    fn save_game(&self, game: GameEntity) -> BoxFuture<'static, StorageResult<()>>;
    /// Removes the game together with its goals, cards, substitutions and lineup.
    fn delete_game(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>>;

    fn goals_for_games(
        &self,
        game_ids: Vec<Uuid>,
    ) -> BoxFuture<'static, StorageResult<Vec<GoalEntity>>>;
    fn save_goal(&self, goal: GoalEntity) -> BoxFuture<'static, StorageResult<()>>;
    fn delete_goal(&self, game_id: Uuid, id: Uuid) -> BoxFuture<'static, StorageResult<bool>>;

    fn cards_for_game(&self, game_id: Uuid) -> BoxFuture<'static, StorageResult<Vec<CardEntity>>>;
    fn save_card(&self, card: CardEntity) -> BoxFuture<'static, StorageResult<()>>;
    fn delete_card(&self, game_id: Uuid, id: Uuid) -> BoxFuture<'static, StorageResult<bool>>;

    fn substitutions_for_game(
        &self,
        game_id: Uuid,
    ) -> BoxFuture<'static, StorageResult<Vec<SubstitutionEntity>>>;
    fn save_substitution(
        &self,
        substitution: SubstitutionEntity,
    ) -> BoxFuture<'static, StorageResult<()>>;
    fn delete_substitution(
        &self,
        game_id: Uuid,
        id: Uuid,
    ) -> BoxFuture<'static, StorageResult<bool>>;

    fn lineup_for_game(
        &self,
        game_id: Uuid,
    ) -> BoxFuture<'static, StorageResult<Vec<LineupEntryEntity>>>;
    /// Replace the whole lineup of a game.
    fn replace_lineup(
        &self,
        game_id: Uuid,
        entries: Vec<LineupEntryEntity>,
    ) -> BoxFuture<'static, StorageResult<()>>;

    /// Case-insensitive substring search on names, at most `limit` hits per kind.
    fn search(&self, query: String, limit: usize)
    -> BoxFuture<'static, StorageResult<SearchHitsEntity>>;

    fn list_favourites(
        &self,
        user_id: String,
    ) -> BoxFuture<'static, StorageResult<Vec<FavouriteEntity>>>;
    /// Returns `false` when the favourite already existed.
    fn save_favourite(&self, favourite: FavouriteEntity) -> BoxFuture<'static, StorageResult<bool>>;
    fn delete_favourite(
        &self,
        user_id: String,
        kind: FavouriteKindEntity,
        target_id: Uuid,
    ) -> BoxFuture<'static, StorageResult<bool>>;

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>>;
    fn try_reconnect(&self) -> BoxFuture<'static, StorageResult<()>>;
}

/// Whether `name` contains `query`, ignoring case. `query` must already be lowercase.
pub(crate) fn name_matches(name: &str, query: &str) -> bool {
    name.to_lowercase().contains(query)
}
