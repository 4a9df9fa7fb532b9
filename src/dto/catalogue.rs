//! Read-side projections of the football catalogue.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::{
    dao::models::{
        CompetitionEntity, ManagerEntity, PlayerEntity, PositionEntity, SeasonEntity, TeamEntity,
    },
    dto::game::GameSummary,
};

/// Competition listed in the catalogue.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CompetitionSummary {
    pub id: Uuid,
    pub name: String,
    pub country: Option<String>,
}

impl From<CompetitionEntity> for CompetitionSummary {
    fn from(value: CompetitionEntity) -> Self {
        Self {
            id: value.id,
            name: value.name,
            country: value.country,
        }
    }
}

/// Season listed in the catalogue.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SeasonSummary {
    pub id: Uuid,
    pub name: String,
}

impl From<SeasonEntity> for SeasonSummary {
    fn from(value: SeasonEntity) -> Self {
        Self {
            id: value.id,
            name: value.name,
        }
    }
}

/// Team listed in the catalogue.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TeamSummary {
    pub id: Uuid,
    pub name: String,
    pub short_name: Option<String>,
    pub founded: Option<u16>,
    pub stadium: Option<String>,
}

impl From<TeamEntity> for TeamSummary {
    fn from(value: TeamEntity) -> Self {
        Self {
            id: value.id,
            name: value.name,
            short_name: value.short_name,
            founded: value.founded,
            stadium: value.stadium,
        }
    }
}

/// Team page: squad, staff and latest fixtures.
#[derive(Debug, Serialize, ToSchema)]
pub struct TeamDetail {
    pub team: TeamSummary,
    pub players: Vec<PlayerSummary>,
    pub managers: Vec<ManagerSummary>,
    /// Most recent games first.
    pub recent_games: Vec<GameSummary>,
}

/// Playing position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PositionDto {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl From<PositionEntity> for PositionDto {
    fn from(value: PositionEntity) -> Self {
        match value {
            PositionEntity::Goalkeeper => Self::Goalkeeper,
            PositionEntity::Defender => Self::Defender,
            PositionEntity::Midfielder => Self::Midfielder,
            PositionEntity::Forward => Self::Forward,
        }
    }
}

impl From<PositionDto> for PositionEntity {
    fn from(value: PositionDto) -> Self {
        match value {
            PositionDto::Goalkeeper => Self::Goalkeeper,
            PositionDto::Defender => Self::Defender,
            PositionDto::Midfielder => Self::Midfielder,
            PositionDto::Forward => Self::Forward,
        }
    }
}

/// Player listed in the catalogue.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PlayerSummary {
    pub id: Uuid,
    pub name: String,
    pub position: PositionDto,
    pub nationality: Option<String>,
    pub shirt_number: Option<u8>,
    pub team_id: Option<Uuid>,
}

impl From<PlayerEntity> for PlayerSummary {
    fn from(value: PlayerEntity) -> Self {
        Self {
            id: value.id,
            name: value.name,
            position: value.position.into(),
            nationality: value.nationality,
            shirt_number: value.shirt_number,
            team_id: value.team_id,
        }
    }
}

/// Manager listed in the catalogue.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ManagerSummary {
    pub id: Uuid,
    pub name: String,
    pub nationality: Option<String>,
    pub team_id: Option<Uuid>,
}

impl From<ManagerEntity> for ManagerSummary {
    fn from(value: ManagerEntity) -> Self {
        Self {
            id: value.id,
            name: value.name,
            nationality: value.nationality,
            team_id: value.team_id,
        }
    }
}

/// Optional team filter for player and manager listings.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TeamFilterQuery {
    /// Restrict the listing to members of this team.
    pub team_id: Option<Uuid>,
}
