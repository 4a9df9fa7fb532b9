use axum::{
    Json, Router,
    extract::{FromRequestParts, Path, State},
    http::{StatusCode, request::Parts},
    routing::{delete, get},
};
use uuid::Uuid;

use crate::{
    dto::favourites::{AddFavouriteRequest, FavouriteItem, FavouriteKindDto},
    error::AppError,
    services::favourites_service,
    state::SharedState,
};

const USER_ID_HEADER: &str = "x-user-id";

/// Caller identity supplied by the hosting front-end in `X-User-Id`.
pub struct UserId(pub String);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(|value| UserId(value.to_owned()))
            .ok_or_else(|| AppError::Unauthorized("missing user header `X-User-Id`".into()))
    }
}

pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/favourites", get(list_favourites).post(add_favourite))
        .route("/favourites/{kind}/{target_id}", delete(remove_favourite))
}

/// Favourites of the calling user, resolved with display names.
#[utoipa::path(
    get,
    path = "/favourites",
    tag = "favourites",
    params(("X-User-Id" = String, Header, description = "Identity of the calling user")),
    responses(
        (status = 200, description = "Favourites", body = [FavouriteItem]),
        (status = 401, description = "Missing user header")
    )
)]
pub async fn list_favourites(
    State(state): State<SharedState>,
    UserId(user_id): UserId,
) -> Result<Json<Vec<FavouriteItem>>, AppError> {
    Ok(Json(
        favourites_service::list_favourites(&state, &user_id).await?,
    ))
}

/// Add a competition, team, player or manager to the caller's favourites.
#[utoipa::path(
    post,
    path = "/favourites",
    tag = "favourites",
    params(("X-User-Id" = String, Header, description = "Identity of the calling user")),
    request_body = AddFavouriteRequest,
    responses(
        (status = 200, description = "Favourite stored", body = FavouriteItem),
        (status = 401, description = "Missing user header"),
        (status = 404, description = "Unknown target")
    )
)]
pub async fn add_favourite(
    State(state): State<SharedState>,
    UserId(user_id): UserId,
    Json(payload): Json<AddFavouriteRequest>,
) -> Result<Json<FavouriteItem>, AppError> {
    Ok(Json(
        favourites_service::add_favourite(&state, &user_id, payload).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/favourites/{kind}/{target_id}",
    tag = "favourites",
    params(
        ("X-User-Id" = String, Header, description = "Identity of the calling user"),
        ("kind" = FavouriteKindDto, Path, description = "Kind of the favourite target"),
        ("target_id" = Uuid, Path, description = "Identifier of the favourite target")
    ),
    responses(
        (status = 204, description = "Favourite removed"),
        (status = 401, description = "Missing user header"),
        (status = 404, description = "Not a favourite")
    )
)]
pub async fn remove_favourite(
    State(state): State<SharedState>,
    UserId(user_id): UserId,
    Path((kind, target_id)): Path<(FavouriteKindDto, Uuid)>,
) -> Result<StatusCode, AppError> {
    favourites_service::remove_favourite(&state, &user_id, kind, target_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
