use uuid::Uuid;

use crate::error::ServiceError;

/// Catalogue maintenance, enrollment, fixtures and match events.
pub mod admin_service;
/// Read-only catalogue projections.
pub mod catalogue_service;
/// OpenAPI documentation generation.
pub mod documentation;
/// Per-user favourites.
pub mod favourites_service;
/// Fixture listings and match centre.
pub mod game_service;
/// Health check service.
pub mod health_service;
/// Name search across the catalogue.
pub mod search_service;
/// League table assembly.
pub mod standings_service;
/// Storage connection supervisor toggling degraded mode.
pub mod storage_supervisor;

pub(crate) fn not_found(kind: &str, id: Uuid) -> ServiceError {
    ServiceError::NotFound(format!("{kind} `{id}` not found"))
}
