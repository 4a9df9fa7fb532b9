use std::sync::Arc;

use futures::{TryStreamExt, future::BoxFuture};
use mongodb::{
    Client, Collection, Database, IndexModel,
    bson::{Document, doc},
    options::IndexOptions,
};
use serde::{Serialize, de::DeserializeOwned};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{
    config::MongoConfig,
    connection::establish_connection,
    error::{MongoDaoError, MongoResult},
    models::{MongoGameDocument, doc_id, field_eq, game_filter, ids_in, name_contains},
};
use crate::dao::{
    football_store::FootballStore,
    models::{
        CardEntity, CompetitionEntity, EnrollmentEntity, FavouriteEntity, FavouriteKindEntity,
        GameEntity, GameFilter, GoalEntity, LineupEntryEntity, ManagerEntity, PlayerEntity,
        SearchHitsEntity, SeasonEntity, SubstitutionEntity, TeamEntity,
    },
    storage::StorageResult,
};

const COMPETITIONS: &str = "competitions";
const SEASONS: &str = "seasons";
const TEAMS: &str = "teams";
const PLAYERS: &str = "players";
const MANAGERS: &str = "managers";
const ENROLLMENTS: &str = "enrollments";
const GAMES: &str = "games";
const GOALS: &str = "goals";
const CARDS: &str = "cards";
const SUBSTITUTIONS: &str = "substitutions";
const LINEUPS: &str = "lineups";
const FAVOURITES: &str = "favourites";

/// Collections keyed by the entity `id` field.
const ID_KEYED: [&str; 9] = [
    COMPETITIONS,
    SEASONS,
    TEAMS,
    PLAYERS,
    MANAGERS,
    GAMES,
    GOALS,
    CARDS,
    SUBSTITUTIONS,
];

/// Collections holding per-game rows, indexed by `game_id`.
const GAME_SCOPED: [&str; 4] = [GOALS, CARDS, SUBSTITUTIONS, LINEUPS];

#[derive(Clone)]
pub struct MongoFootballStore {
    inner: Arc<MongoInner>,
}

struct MongoInner {
    state: RwLock<MongoState>,
    config: MongoConfig,
}

struct MongoState {
    #[allow(dead_code)]
    client: Client,
    database: Database,
}

impl MongoInner {
    async fn ping(&self) -> MongoResult<()> {
        let database = {
            let guard = self.state.read().await;
            guard.database.clone()
        };

        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|source| MongoDaoError::HealthPing { source })?;
        Ok(())
    }

    async fn reconnect(&self) -> MongoResult<()> {
        let (client, database) = establish_connection(&self.config).await?;
        let mut guard = self.state.write().await;
        guard.client = client;
        guard.database = database;
        Ok(())
    }
}

impl MongoFootballStore {
    /// Establish a connection to MongoDB and ensure indexes are present.
    pub async fn connect(config: MongoConfig) -> MongoResult<Self> {
        let (client, database) = establish_connection(&config).await?;

        let inner = Arc::new(MongoInner {
            state: RwLock::new(MongoState { client, database }),
            config,
        });

        let store = Self { inner };
        store.ensure_indexes().await?;
        Ok(store)
    }

    async fn ensure_indexes(&self) -> MongoResult<()> {
        for name in ID_KEYED {
            self.create_index(name, "id", doc! {"id": 1}, true).await?;
        }
        for name in GAME_SCOPED {
            self.create_index(name, "game_id", doc! {"game_id": 1}, false)
                .await?;
        }
        self.create_index(
            ENROLLMENTS,
            "competition_id,season_id,team_id",
            doc! {"competition_id": 1, "season_id": 1, "team_id": 1},
            true,
        )
        .await?;
        self.create_index(
            GAMES,
            "competition_id,season_id",
            doc! {"competition_id": 1, "season_id": 1},
            false,
        )
        .await?;
        self.create_index(
            FAVOURITES,
            "user_id,kind,target_id",
            doc! {"user_id": 1, "kind": 1, "target_id": 1},
            true,
        )
        .await?;
        self.create_index(PLAYERS, "team_id", doc! {"team_id": 1}, false)
            .await?;

        Ok(())
    }

    async fn create_index(
        &self,
        collection: &'static str,
        index: &'static str,
        keys: Document,
        unique: bool,
    ) -> MongoResult<()> {
        let model = IndexModel::builder()
            .keys(keys)
            .options(
                IndexOptions::builder()
                    .name(Some(format!("{collection}_{}_idx", index.replace(',', "_"))))
                    .unique(Some(unique))
                    .build(),
            )
            .build();

        self.database()
            .await
            .collection::<Document>(collection)
            .create_index(model)
            .await
            .map_err(|source| MongoDaoError::EnsureIndex {
                collection,
                index,
                source,
            })?;
        Ok(())
    }

    async fn database(&self) -> Database {
        let guard = self.inner.state.read().await;
        guard.database.clone()
    }

    async fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        let guard = self.inner.state.read().await;
        guard.database.collection::<T>(name)
    }

    async fn find_by_id<T>(&self, name: &'static str, id: Uuid) -> MongoResult<Option<T>>
    where
        T: DeserializeOwned + Unpin + Send + Sync,
    {
        self.collection::<T>(name)
            .await
            .find_one(doc_id(id))
            .await
            .map_err(|source| MongoDaoError::Load {
                collection: name,
                id,
                source,
            })
    }

    async fn find_many<T>(
        &self,
        name: &'static str,
        filter: Document,
        limit: Option<i64>,
    ) -> MongoResult<Vec<T>>
    where
        T: DeserializeOwned + Unpin + Send + Sync,
    {
        let collection = self.collection::<T>(name).await;
        let mut action = collection.find(filter);
        if let Some(limit) = limit {
            action = action.limit(limit);
        }
        action
            .await
            .map_err(|source| MongoDaoError::Query {
                collection: name,
                source,
            })?
            .try_collect()
            .await
            .map_err(|source| MongoDaoError::Query {
                collection: name,
                source,
            })
    }

    /// Name matches ordered by name, so the limit keeps the alphabetically first hits.
    async fn find_by_name<T>(
        &self,
        name: &'static str,
        filter: Document,
        limit: i64,
    ) -> MongoResult<Vec<T>>
    where
        T: DeserializeOwned + Unpin + Send + Sync,
    {
        let collection = self.collection::<T>(name).await;
        collection
            .find(filter)
            .sort(doc! {"name": 1})
            .limit(limit)
            .await
            .map_err(|source| MongoDaoError::Query {
                collection: name,
                source,
            })?
            .try_collect()
            .await
            .map_err(|source| MongoDaoError::Query {
                collection: name,
                source,
            })
    }

    async fn upsert<T>(&self, name: &'static str, id: Uuid, value: T) -> MongoResult<()>
    where
        T: Serialize + Send + Sync,
    {
        self.collection::<T>(name)
            .await
            .replace_one(doc_id(id), value)
            .upsert(true)
            .await
            .map_err(|source| MongoDaoError::Save {
                collection: name,
                id,
                source,
            })?;
        Ok(())
    }

    async fn delete_where(
        &self,
        name: &'static str,
        id: Uuid,
        filter: Document,
    ) -> MongoResult<bool> {
        let result = self
            .collection::<Document>(name)
            .await
            .delete_many(filter)
            .await
            .map_err(|source| MongoDaoError::Delete {
                collection: name,
                id,
                source,
            })?;
        Ok(result.deleted_count > 0)
    }

    async fn delete_by_id(&self, name: &'static str, id: Uuid) -> MongoResult<bool> {
        self.delete_where(name, id, doc_id(id)).await
    }

    /// Delete a catalogue entry together with the enrollments referencing it.
    async fn delete_enrolled(
        &self,
        name: &'static str,
        field: &str,
        id: Uuid,
    ) -> MongoResult<bool> {
        let removed = self.delete_by_id(name, id).await?;
        if removed {
            self.delete_children(&[ENROLLMENTS], field, id).await?;
        }
        Ok(removed)
    }

    fn scoped_event_filter(game_id: Uuid, id: Uuid) -> Document {
        let mut filter = doc_id(id);
        filter.extend(field_eq("game_id", game_id));
        filter
    }

    async fn enrolled_teams(
        &self,
        competition_id: Uuid,
        season_id: Uuid,
    ) -> MongoResult<Vec<TeamEntity>> {
        let mut filter = field_eq("competition_id", competition_id);
        filter.extend(field_eq("season_id", season_id));
        let enrollments: Vec<EnrollmentEntity> = self.find_many(ENROLLMENTS, filter, None).await?;
        if enrollments.is_empty() {
            return Ok(Vec::new());
        }

        let team_ids: Vec<Uuid> = enrollments.iter().map(|e| e.team_id).collect();
        self.find_many(TEAMS, ids_in("id", &team_ids), None).await
    }

    fn enrollment_filter(enrollment: &EnrollmentEntity) -> Document {
        let mut filter = field_eq("competition_id", enrollment.competition_id);
        filter.extend(field_eq("season_id", enrollment.season_id));
        filter.extend(field_eq("team_id", enrollment.team_id));
        filter
    }

    async fn enroll_team(&self, enrollment: EnrollmentEntity) -> MongoResult<bool> {
        let result = self
            .collection::<EnrollmentEntity>(ENROLLMENTS)
            .await
            .replace_one(Self::enrollment_filter(&enrollment), enrollment)
            .upsert(true)
            .await
            .map_err(|source| MongoDaoError::Save {
                collection: ENROLLMENTS,
                id: enrollment.team_id,
                source,
            })?;
        Ok(result.upserted_id.is_some())
    }

    /// Remove entities owned by a deleted parent (enrollments of a team, events of a game).
    async fn delete_children(
        &self,
        collections: &[&'static str],
        field: &str,
        parent_id: Uuid,
    ) -> MongoResult<()> {
        for name in collections.iter().copied() {
            self.delete_where(name, parent_id, field_eq(field, parent_id))
                .await?;
        }
        Ok(())
    }

    async fn list_games(&self, filter: GameFilter) -> MongoResult<Vec<GameEntity>> {
        let documents: Vec<MongoGameDocument> =
            self.find_many(GAMES, game_filter(&filter), None).await?;
        Ok(documents.into_iter().map(Into::into).collect())
    }

    async fn find_game(&self, id: Uuid) -> MongoResult<Option<GameEntity>> {
        let document: Option<MongoGameDocument> = self.find_by_id(GAMES, id).await?;
        Ok(document.map(Into::into))
    }

    async fn delete_game(&self, id: Uuid) -> MongoResult<bool> {
        let removed = self.delete_by_id(GAMES, id).await?;
        if removed {
            self.delete_children(&GAME_SCOPED, "game_id", id).await?;
        }
        Ok(removed)
    }

    async fn replace_lineup(&self, game_id: Uuid, entries: Vec<LineupEntryEntity>) -> MongoResult<()> {
        self.delete_children(&[LINEUPS], "game_id", game_id).await?;
        if entries.is_empty() {
            return Ok(());
        }

        self.collection::<LineupEntryEntity>(LINEUPS)
            .await
            .insert_many(entries)
            .await
            .map_err(|source| MongoDaoError::Save {
                collection: LINEUPS,
                id: game_id,
                source,
            })?;
        Ok(())
    }

    async fn search(&self, query: String, limit: usize) -> MongoResult<SearchHitsEntity> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let filter = name_contains(&query);
        Ok(SearchHitsEntity {
            competitions: self.find_by_name(COMPETITIONS, filter.clone(), limit).await?,
            teams: self.find_by_name(TEAMS, filter.clone(), limit).await?,
            players: self.find_by_name(PLAYERS, filter.clone(), limit).await?,
            managers: self.find_by_name(MANAGERS, filter, limit).await?,
        })
    }

    fn favourite_filter(user_id: &str, kind: FavouriteKindEntity, target_id: Uuid) -> Document {
        let kind = match kind {
            FavouriteKindEntity::Competition => "competition",
            FavouriteKindEntity::Team => "team",
            FavouriteKindEntity::Player => "player",
            FavouriteKindEntity::Manager => "manager",
        };
        let mut filter = doc! {"user_id": user_id, "kind": kind};
        filter.extend(field_eq("target_id", target_id));
        filter
    }

    async fn save_favourite(&self, favourite: FavouriteEntity) -> MongoResult<bool> {
        let filter =
            Self::favourite_filter(&favourite.user_id, favourite.kind, favourite.target_id);
        let existing: Vec<FavouriteEntity> = self.find_many(FAVOURITES, filter, Some(1)).await?;
        if !existing.is_empty() {
            return Ok(false);
        }

        let target_id = favourite.target_id;
        self.collection::<FavouriteEntity>(FAVOURITES)
            .await
            .insert_one(favourite)
            .await
            .map_err(|source| MongoDaoError::Save {
                collection: FAVOURITES,
                id: target_id,
                source,
            })?;
        Ok(true)
    }
}

fn optional_team(field: &str, team_id: Option<Uuid>) -> Document {
    team_id
        .map(|id| field_eq(field, id))
        .unwrap_or_default()
}

impl FootballStore for MongoFootballStore {
    fn list_competitions(&self) -> BoxFuture<'static, StorageResult<Vec<CompetitionEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .find_many(COMPETITIONS, doc! {}, None)
                .await
                .map_err(Into::into)
        })
    }

    fn find_competition(
        &self,
        id: Uuid,
    ) -> BoxFuture<'static, StorageResult<Option<CompetitionEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.find_by_id(COMPETITIONS, id).await.map_err(Into::into) })
    }

    fn save_competition(
        &self,
        competition: CompetitionEntity,
    ) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .upsert(COMPETITIONS, competition.id, competition)
                .await
                .map_err(Into::into)
        })
    }

    fn delete_competition(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .delete_enrolled(COMPETITIONS, "competition_id", id)
                .await
                .map_err(Into::into)
        })
    }

    fn list_seasons(&self) -> BoxFuture<'static, StorageResult<Vec<SeasonEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .find_many(SEASONS, doc! {}, None)
                .await
                .map_err(Into::into)
        })
    }

    fn find_season(&self, id: Uuid) -> BoxFuture<'static, StorageResult<Option<SeasonEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.find_by_id(SEASONS, id).await.map_err(Into::into) })
    }

    fn save_season(&self, season: SeasonEntity) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .upsert(SEASONS, season.id, season)
                .await
                .map_err(Into::into)
        })
    }

    fn delete_season(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .delete_enrolled(SEASONS, "season_id", id)
                .await
                .map_err(Into::into)
        })
    }

    fn list_teams(&self) -> BoxFuture<'static, StorageResult<Vec<TeamEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .find_many(TEAMS, doc! {}, None)
                .await
                .map_err(Into::into)
        })
    }

    fn find_team(&self, id: Uuid) -> BoxFuture<'static, StorageResult<Option<TeamEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.find_by_id(TEAMS, id).await.map_err(Into::into) })
    }

    fn save_team(&self, team: TeamEntity) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.upsert(TEAMS, team.id, team).await.map_err(Into::into) })
    }

    fn delete_team(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .delete_enrolled(TEAMS, "team_id", id)
                .await
                .map_err(Into::into)
        })
    }

    fn list_players(
        &self,
        team_id: Option<Uuid>,
    ) -> BoxFuture<'static, StorageResult<Vec<PlayerEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .find_many(PLAYERS, optional_team("team_id", team_id), None)
                .await
                .map_err(Into::into)
        })
    }

    fn find_player(&self, id: Uuid) -> BoxFuture<'static, StorageResult<Option<PlayerEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.find_by_id(PLAYERS, id).await.map_err(Into::into) })
    }

    fn save_player(&self, player: PlayerEntity) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .upsert(PLAYERS, player.id, player)
                .await
                .map_err(Into::into)
        })
    }

    fn delete_player(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move { store.delete_by_id(PLAYERS, id).await.map_err(Into::into) })
    }

    fn list_managers(
        &self,
        team_id: Option<Uuid>,
    ) -> BoxFuture<'static, StorageResult<Vec<ManagerEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .find_many(MANAGERS, optional_team("team_id", team_id), None)
                .await
                .map_err(Into::into)
        })
    }

    fn find_manager(&self, id: Uuid) -> BoxFuture<'static, StorageResult<Option<ManagerEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.find_by_id(MANAGERS, id).await.map_err(Into::into) })
    }

    fn save_manager(&self, manager: ManagerEntity) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .upsert(MANAGERS, manager.id, manager)
                .await
                .map_err(Into::into)
        })
    }

    fn delete_manager(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move { store.delete_by_id(MANAGERS, id).await.map_err(Into::into) })
    }

    fn enrolled_teams(
        &self,
        competition_id: Uuid,
        season_id: Uuid,
    ) -> BoxFuture<'static, StorageResult<Vec<TeamEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .enrolled_teams(competition_id, season_id)
                .await
                .map_err(Into::into)
        })
    }

    fn enroll_team(&self, enrollment: EnrollmentEntity) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move { store.enroll_team(enrollment).await.map_err(Into::into) })
    }

    fn withdraw_team(
        &self,
        enrollment: EnrollmentEntity,
    ) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .delete_where(
                    ENROLLMENTS,
                    enrollment.team_id,
                    Self::enrollment_filter(&enrollment),
                )
                .await
                .map_err(Into::into)
        })
    }

    fn list_games(&self, filter: GameFilter) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.list_games(filter).await.map_err(Into::into) })
    }

    fn find_game(&self, id: Uuid) -> BoxFuture<'static, StorageResult<Option<GameEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.find_game(id).await.map_err(Into::into) })
    }

    fn save_game(&self, game: GameEntity) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move {
            let id = game.id;
            store
                .upsert(GAMES, id, MongoGameDocument::from(game))
                .await
                .map_err(Into::into)
        })
    }

    fn delete_game(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move { store.delete_game(id).await.map_err(Into::into) })
    }

    fn goals_for_games(
        &self,
        game_ids: Vec<Uuid>,
    ) -> BoxFuture<'static, StorageResult<Vec<GoalEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            if game_ids.is_empty() {
                return Ok(Vec::new());
            }
            store
                .find_many(GOALS, ids_in("game_id", &game_ids), None)
                .await
                .map_err(Into::into)
        })
    }

    fn save_goal(&self, goal: GoalEntity) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.upsert(GOALS, goal.id, goal).await.map_err(Into::into) })
    }

    fn delete_goal(&self, game_id: Uuid, id: Uuid) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move {
            let filter = Self::scoped_event_filter(game_id, id);
            store
                .delete_where(GOALS, id, filter)
                .await
                .map_err(Into::into)
        })
    }

    fn cards_for_game(&self, game_id: Uuid) -> BoxFuture<'static, StorageResult<Vec<CardEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .find_many(CARDS, field_eq("game_id", game_id), None)
                .await
                .map_err(Into::into)
        })
    }

    fn save_card(&self, card: CardEntity) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.upsert(CARDS, card.id, card).await.map_err(Into::into) })
    }

    fn delete_card(&self, game_id: Uuid, id: Uuid) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move {
            let filter = Self::scoped_event_filter(game_id, id);
            store
                .delete_where(CARDS, id, filter)
                .await
                .map_err(Into::into)
        })
    }

    fn substitutions_for_game(
        &self,
        game_id: Uuid,
    ) -> BoxFuture<'static, StorageResult<Vec<SubstitutionEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .find_many(SUBSTITUTIONS, field_eq("game_id", game_id), None)
                .await
                .map_err(Into::into)
        })
    }

    fn save_substitution(
        &self,
        substitution: SubstitutionEntity,
    ) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .upsert(SUBSTITUTIONS, substitution.id, substitution)
                .await
                .map_err(Into::into)
        })
    }

    fn delete_substitution(
        &self,
        game_id: Uuid,
        id: Uuid,
    ) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move {
            let filter = Self::scoped_event_filter(game_id, id);
            store
                .delete_where(SUBSTITUTIONS, id, filter)
                .await
                .map_err(Into::into)
        })
    }

    fn lineup_for_game(
        &self,
        game_id: Uuid,
    ) -> BoxFuture<'static, StorageResult<Vec<LineupEntryEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .find_many(LINEUPS, field_eq("game_id", game_id), None)
                .await
                .map_err(Into::into)
        })
    }

    fn replace_lineup(
        &self,
        game_id: Uuid,
        entries: Vec<LineupEntryEntity>,
    ) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .replace_lineup(game_id, entries)
                .await
                .map_err(Into::into)
        })
    }

    fn search(
        &self,
        query: String,
        limit: usize,
    ) -> BoxFuture<'static, StorageResult<SearchHitsEntity>> {
        let store = self.clone();
        Box::pin(async move { store.search(query, limit).await.map_err(Into::into) })
    }

    fn list_favourites(
        &self,
        user_id: String,
    ) -> BoxFuture<'static, StorageResult<Vec<FavouriteEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .find_many(FAVOURITES, doc! {"user_id": user_id}, None)
                .await
                .map_err(Into::into)
        })
    }

    fn save_favourite(&self, favourite: FavouriteEntity) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move { store.save_favourite(favourite).await.map_err(Into::into) })
    }

    fn delete_favourite(
        &self,
        user_id: String,
        kind: FavouriteKindEntity,
        target_id: Uuid,
    ) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .delete_where(
                    FAVOURITES,
                    target_id,
                    Self::favourite_filter(&user_id, kind, target_id),
                )
                .await
                .map_err(Into::into)
        })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.inner.ping().await.map_err(Into::into) })
    }

    fn try_reconnect(&self) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.inner.reconnect().await.map_err(Into::into) })
    }
}
