use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StoreResult;
use crate::models::{Actor, Movie, NewMovie};
use crate::store::{CatalogStore, fresh_id};

/// In-memory backend. Everything lives behind one lock, so the
/// find-or-create inside `upsert_actor` is a single atomic step.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    movies: Vec<Movie>,
    actors: Vec<Actor>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn list_movies(&self) -> StoreResult<Vec<Movie>> {
        Ok(self.inner.read().await.movies.clone())
    }

    async fn movie_by_id(&self, id: &str) -> StoreResult<Option<Movie>> {
        Ok(self.inner.read().await.movies.iter().find(|m| m.id == id).cloned())
    }

    async fn create_movie(&self, fields: NewMovie) -> StoreResult<Movie> {
        let movie = Movie {
            id: fresh_id(),
            title: fields.title,
            release_date: fields.release_date,
            rating: fields.rating,
            status: fields.status,
            actor_id: fields.actor_id,
        };
        self.inner.write().await.movies.push(movie.clone());
        tracing::debug!(id = %movie.id, title = %movie.title, "movie created");
        Ok(movie)
    }

    async fn actor_by_id(&self, id: &str) -> StoreResult<Option<Actor>> {
        Ok(self.inner.read().await.actors.iter().find(|a| a.id == id).cloned())
    }

    async fn upsert_actor(&self, name: &str) -> StoreResult<Actor> {
        let mut inner = self.inner.write().await;
        if let Some(existing) = inner.actors.iter().find(|a| a.name == name) {
            return Ok(existing.clone());
        }
        let actor = Actor { id: fresh_id(), name: name.to_string() };
        inner.actors.push(actor.clone());
        tracing::debug!(id = %actor.id, name = %actor.name, "actor created");
        Ok(actor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Status;

    fn draft(title: &str) -> NewMovie {
        NewMovie {
            title: title.to_string(),
            release_date: None,
            rating: None,
            status: Status::Unknown,
            actor_id: None,
        }
    }

    #[tokio::test]
    async fn movie_lookup_hits_and_misses() {
        let store = MemoryStore::new();
        let created = store.create_movie(draft("5 Deadly Venoms")).await.unwrap();

        let found = store.movie_by_id(&created.id).await.unwrap();
        assert_eq!(found, Some(created));

        let missing = store.movie_by_id("no-such-id").await.unwrap();
        assert_eq!(missing, None);
    }

    #[tokio::test]
    async fn create_assigns_distinct_ids() {
        let store = MemoryStore::new();
        let a = store.create_movie(draft("A")).await.unwrap();
        let b = store.create_movie(draft("B")).await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(store.list_movies().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn actor_upsert_is_idempotent() {
        let store = MemoryStore::new();
        let first = store.upsert_actor("Gordon Liu").await.unwrap();
        let second = store.upsert_actor("Gordon Liu").await.unwrap();
        assert_eq!(first.id, second.id);

        let other = store.upsert_actor("Chia-Hui Liu").await.unwrap();
        assert_ne!(first.id, other.id);
    }

    #[tokio::test]
    async fn concurrent_upserts_collapse_to_one_record() {
        let store = std::sync::Arc::new(MemoryStore::new());
        let mut handles = Vec::new();
        for _ in 0..16 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.upsert_actor("Gordon Liu").await.unwrap()
            }));
        }
        let mut ids = std::collections::HashSet::new();
        for handle in handles {
            ids.insert(handle.await.unwrap().id);
        }
        assert_eq!(ids.len(), 1);
    }
}
