use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    dao::models::SearchHitsEntity,
    dto::catalogue::{CompetitionSummary, ManagerSummary, PlayerSummary, TeamSummary},
};

/// Query string of the search endpoint.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Case-insensitive name fragment.
    #[serde(default)]
    pub q: String,
}

/// Search hits grouped per kind, each sorted by name.
#[derive(Debug, Default, Serialize, ToSchema)]
pub struct SearchResponse {
    pub competitions: Vec<CompetitionSummary>,
    pub teams: Vec<TeamSummary>,
    pub players: Vec<PlayerSummary>,
    pub managers: Vec<ManagerSummary>,
}

impl From<SearchHitsEntity> for SearchResponse {
    fn from(value: SearchHitsEntity) -> Self {
        let mut response = Self {
            competitions: value.competitions.into_iter().map(Into::into).collect(),
            teams: value.teams.into_iter().map(Into::into).collect(),
            players: value.players.into_iter().map(Into::into).collect(),
            managers: value.managers.into_iter().map(Into::into).collect(),
        };
        response.competitions.sort_by(|a, b| a.name.cmp(&b.name));
        response.teams.sort_by(|a, b| a.name.cmp(&b.name));
        response.players.sort_by(|a, b| a.name.cmp(&b.name));
        response.managers.sort_by(|a, b| a.name.cmp(&b.name));
        response
    }
}
