//! Per-user favourites keyed by the caller identity header.

use std::{sync::Arc, time::SystemTime};

use tracing::debug;
use uuid::Uuid;

use crate::{
    dao::{
        football_store::FootballStore,
        models::{FavouriteEntity, FavouriteKindEntity},
    },
    dto::{
        favourites::{AddFavouriteRequest, FavouriteItem, FavouriteKindDto},
        format_system_time,
    },
    error::ServiceError,
    services::not_found,
    state::SharedState,
};

/// Display name of the favourite target, `None` when it no longer exists.
async fn target_name(
    store: &Arc<dyn FootballStore>,
    kind: FavouriteKindEntity,
    id: Uuid,
) -> Result<Option<String>, ServiceError> {
    let name = match kind {
        FavouriteKindEntity::Competition => store.find_competition(id).await?.map(|c| c.name),
        FavouriteKindEntity::Team => store.find_team(id).await?.map(|t| t.name),
        FavouriteKindEntity::Player => store.find_player(id).await?.map(|p| p.name),
        FavouriteKindEntity::Manager => store.find_manager(id).await?.map(|m| m.name),
    };
    Ok(name)
}

fn kind_label(kind: FavouriteKindEntity) -> &'static str {
    match kind {
        FavouriteKindEntity::Competition => "competition",
        FavouriteKindEntity::Team => "team",
        FavouriteKindEntity::Player => "player",
        FavouriteKindEntity::Manager => "manager",
    }
}

/// Favourites of `user_id`, oldest first. Entries whose target was deleted are skipped.
pub async fn list_favourites(
    state: &SharedState,
    user_id: &str,
) -> Result<Vec<FavouriteItem>, ServiceError> {
    let store = state.require_store().await?;
    let mut favourites = store.list_favourites(user_id.to_owned()).await?;
    favourites.sort_by_key(|favourite| favourite.created_at);

    let mut items = Vec::with_capacity(favourites.len());
    for favourite in favourites {
        let Some(name) = target_name(&store, favourite.kind, favourite.target_id).await? else {
            debug!(
                user_id,
                target_id = %favourite.target_id,
                "skipping dangling favourite"
            );
            continue;
        };
        items.push(FavouriteItem {
            kind: favourite.kind.into(),
            target_id: favourite.target_id,
            name,
            created_at: format_system_time(favourite.created_at),
        });
    }
    Ok(items)
}

/// Add a favourite. Adding an existing favourite again is a no-op.
pub async fn add_favourite(
    state: &SharedState,
    user_id: &str,
    request: AddFavouriteRequest,
) -> Result<FavouriteItem, ServiceError> {
    let store = state.require_store().await?;
    let kind: FavouriteKindEntity = request.kind.into();
    let name = target_name(&store, kind, request.target_id)
        .await?
        .ok_or_else(|| not_found(kind_label(kind), request.target_id))?;

    let favourite = FavouriteEntity {
        user_id: user_id.to_owned(),
        kind,
        target_id: request.target_id,
        created_at: SystemTime::now(),
    };
    let created_at = favourite.created_at;
    let inserted = store.save_favourite(favourite).await?;
    debug!(user_id, target_id = %request.target_id, inserted, "favourite saved");

    Ok(FavouriteItem {
        kind: request.kind,
        target_id: request.target_id,
        name,
        created_at: format_system_time(created_at),
    })
}

/// Drop one favourite of `user_id`; 404 when it was not stored.
pub async fn remove_favourite(
    state: &SharedState,
    user_id: &str,
    kind: FavouriteKindDto,
    target_id: Uuid,
) -> Result<(), ServiceError> {
    let store = state.require_store().await?;
    if store
        .delete_favourite(user_id.to_owned(), kind.into(), target_id)
        .await?
    {
        Ok(())
    } else {
        Err(ServiceError::NotFound(format!(
            "favourite {} `{target_id}` not found",
            kind_label(kind.into())
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::AppConfig, dao::football_store::memory::MemoryFootballStore,
        dao::models::TeamEntity, state::AppState,
    };

    async fn state_with_team() -> (SharedState, Arc<MemoryFootballStore>, Uuid) {
        let store = Arc::new(MemoryFootballStore::new());
        let team_id = Uuid::new_v4();
        store
            .save_team(TeamEntity {
                id: team_id,
                name: "Arsenal".into(),
                short_name: Some("ARS".into()),
                founded: Some(1886),
                stadium: None,
            })
            .await
            .unwrap();
        let state = AppState::with_store(AppConfig::default(), store.clone()).await;
        (state, store, team_id)
    }

    fn team_request(target_id: Uuid) -> AddFavouriteRequest {
        AddFavouriteRequest {
            kind: FavouriteKindDto::Team,
            target_id,
        }
    }

    #[tokio::test]
    async fn adding_is_idempotent_and_per_user() {
        let (state, _, team_id) = state_with_team().await;

        add_favourite(&state, "alice", team_request(team_id))
            .await
            .unwrap();
        add_favourite(&state, "alice", team_request(team_id))
            .await
            .unwrap();

        let alice = list_favourites(&state, "alice").await.unwrap();
        assert_eq!(alice.len(), 1);
        assert_eq!(alice[0].name, "Arsenal");
        assert!(list_favourites(&state, "bob").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_target_is_not_found() {
        let (state, _, _) = state_with_team().await;
        let err = add_favourite(&state, "alice", team_request(Uuid::new_v4()))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn dangling_favourites_are_skipped() {
        let (state, store, team_id) = state_with_team().await;
        add_favourite(&state, "alice", team_request(team_id))
            .await
            .unwrap();
        store.delete_team(team_id).await.unwrap();

        assert!(list_favourites(&state, "alice").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn removing_unknown_favourite_is_not_found() {
        let (state, _, team_id) = state_with_team().await;
        let err = remove_favourite(&state, "alice", FavouriteKindDto::Team, team_id)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));

        add_favourite(&state, "alice", team_request(team_id))
            .await
            .unwrap();
        remove_favourite(&state, "alice", FavouriteKindDto::Team, team_id)
            .await
            .unwrap();
    }
}
