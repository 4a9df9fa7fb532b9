use crate::{dto::search::SearchResponse, error::ServiceError, state::SharedState};

/// Case-insensitive name search across the catalogue.
pub async fn search(state: &SharedState, query: &str) -> Result<SearchResponse, ServiceError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(ServiceError::InvalidInput(
            "search query must not be empty".into(),
        ));
    }

    let store = state.require_store().await?;
    let hits = store
        .search(query.to_owned(), state.config().search_limit())
        .await?;
    Ok(hits.into())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use uuid::Uuid;

    use super::*;
    use crate::{
        config::AppConfig,
        dao::{
            football_store::{FootballStore, memory::MemoryFootballStore},
            models::{ManagerEntity, TeamEntity},
        },
        state::AppState,
    };

    #[tokio::test]
    async fn blank_query_is_rejected() {
        let state = AppState::with_store(
            AppConfig::default(),
            Arc::new(MemoryFootballStore::new()),
        )
        .await;
        assert!(matches!(
            search(&state, "   ").await,
            Err(ServiceError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn hits_are_grouped_and_sorted() {
        let store = Arc::new(MemoryFootballStore::new());
        for name in ["Manchester United", "Manchester City"] {
            store
                .save_team(TeamEntity {
                    id: Uuid::new_v4(),
                    name: name.into(),
                    short_name: None,
                    founded: None,
                    stadium: None,
                })
                .await
                .unwrap();
        }
        store
            .save_manager(ManagerEntity {
                id: Uuid::new_v4(),
                name: "Pep Guardiola".into(),
                nationality: None,
                team_id: None,
            })
            .await
            .unwrap();
        let state = AppState::with_store(AppConfig::default(), store).await;

        let response = search(&state, " MANCHESTER ").await.unwrap();
        let teams: Vec<_> = response.teams.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(teams, ["Manchester City", "Manchester United"]);
        assert!(response.managers.is_empty());
        assert!(response.competitions.is_empty());
    }
}
