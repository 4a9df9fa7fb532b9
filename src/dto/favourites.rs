//! Per-user favourites.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::dao::models::FavouriteKindEntity;

/// What a favourite points at.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FavouriteKindDto {
    Competition,
    Team,
    Player,
    Manager,
}

impl From<FavouriteKindEntity> for FavouriteKindDto {
    fn from(value: FavouriteKindEntity) -> Self {
        match value {
            FavouriteKindEntity::Competition => Self::Competition,
            FavouriteKindEntity::Team => Self::Team,
            FavouriteKindEntity::Player => Self::Player,
            FavouriteKindEntity::Manager => Self::Manager,
        }
    }
}

impl From<FavouriteKindDto> for FavouriteKindEntity {
    fn from(value: FavouriteKindDto) -> Self {
        match value {
            FavouriteKindDto::Competition => Self::Competition,
            FavouriteKindDto::Team => Self::Team,
            FavouriteKindDto::Player => Self::Player,
            FavouriteKindDto::Manager => Self::Manager,
        }
    }
}

/// Body of `POST /favourites`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AddFavouriteRequest {
    pub kind: FavouriteKindDto,
    pub target_id: Uuid,
}

/// Favourite resolved against the catalogue.
#[derive(Debug, Clone, Serialize, ToSchema, PartialEq, Eq)]
pub struct FavouriteItem {
    pub kind: FavouriteKindDto,
    pub target_id: Uuid,
    pub name: String,
    /// RFC 3339 time the favourite was added.
    pub created_at: String,
}
