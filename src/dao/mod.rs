/// Persistence backends for the football catalogue and match data.
pub mod football_store;
/// Catalogue, match and favourite records as persisted.
pub mod models;
/// Backend-agnostic storage errors.
pub mod storage;
