use std::sync::Arc;

use crate::error::StoreResult;
use crate::models::Actor;
use crate::store::CatalogStore;

/// Materializes a movie's raw actor reference into an `Actor`.
///
/// This is the single seam between the read path and the storage
/// representation of the link. A dangling id is a steady-state
/// condition (the actor may have been removed out of band) and resolves
/// to `None`, not an error.
#[derive(Clone)]
pub struct ActorResolver {
    store: Arc<dyn CatalogStore>,
}

impl ActorResolver {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    pub async fn resolve(&self, actor_id: Option<&str>) -> StoreResult<Option<Actor>> {
        match actor_id {
            None => Ok(None),
            Some(id) => self.store.actor_by_id(id).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn absent_reference_resolves_to_none() {
        let store: Arc<dyn CatalogStore> = Arc::new(MemoryStore::new());
        let resolver = ActorResolver::new(store);
        assert_eq!(resolver.resolve(None).await.unwrap(), None);
    }

    #[tokio::test]
    async fn dangling_reference_resolves_to_none() {
        let store: Arc<dyn CatalogStore> = Arc::new(MemoryStore::new());
        let resolver = ActorResolver::new(store);
        assert_eq!(resolver.resolve(Some("gone")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn live_reference_resolves_to_the_actor() {
        let store = Arc::new(MemoryStore::new());
        let actor = store.upsert_actor("Gordon Liu").await.unwrap();
        let resolver = ActorResolver::new(store);
        assert_eq!(resolver.resolve(Some(&actor.id)).await.unwrap(), Some(actor));
    }
}
