use axum::Router;

use crate::state::SharedState;

pub mod admin;
pub mod catalogue;
pub mod docs;
pub mod favourites;
pub mod game;
pub mod health;
pub mod search;

/// Assemble the public, admin and documentation routes over one shared state.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = health::router()
        .merge(catalogue::router())
        .merge(game::router())
        .merge(search::router())
        .merge(favourites::router())
        .merge(admin::router(state.clone()))
        .merge(docs::router());

    api_router.with_state(state)
}
