mod database;
mod memory;

pub use database::DbStore;
pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::models::{Actor, Movie, NewMovie};

/// Persistence contract for the catalog.
///
/// Both backends expose identical semantics: lookups by unknown id
/// return `Ok(None)`, `create_movie` always assigns a fresh id, and
/// `upsert_actor` is atomic with respect to the name key: two
/// concurrent upserts of the same name yield one record.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn list_movies(&self) -> StoreResult<Vec<Movie>>;

    async fn movie_by_id(&self, id: &str) -> StoreResult<Option<Movie>>;

    async fn create_movie(&self, fields: NewMovie) -> StoreResult<Movie>;

    async fn actor_by_id(&self, id: &str) -> StoreResult<Option<Actor>>;

    /// Create-or-update keyed by name. Returns the canonical record,
    /// whether it already existed or was just inserted.
    async fn upsert_actor(&self, name: &str) -> StoreResult<Actor>;
}

pub(crate) fn fresh_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
