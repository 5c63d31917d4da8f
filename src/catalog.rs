use std::sync::Arc;

use crate::error::StoreResult;
use crate::models::{CatalogMovie, MovieDraft, NewMovie};
use crate::notify::ChangeNotifier;
use crate::resolve::ActorResolver;
use crate::store::CatalogStore;

/// Event name for newly created movies.
pub const MOVIE_ADDED: &str = "movieAdded";

/// Opaque authentication signal. Presence is what matters; how it is
/// established belongs to the transport layer.
#[derive(Clone, Debug)]
pub struct CallerIdentity(pub String);

/// Orchestrates the store, the reference resolver, and the change
/// notifier behind the three operations the API exposes. Stateless
/// between calls apart from those shared collaborators.
pub struct CatalogService {
    store: Arc<dyn CatalogStore>,
    resolver: ActorResolver,
    notifier: Arc<ChangeNotifier<CatalogMovie>>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn CatalogStore>, notifier: Arc<ChangeNotifier<CatalogMovie>>) -> Self {
        let resolver = ActorResolver::new(store.clone());
        Self { store, resolver, notifier }
    }

    pub fn notifier(&self) -> &ChangeNotifier<CatalogMovie> {
        &self.notifier
    }

    pub async fn list_movies(&self) -> StoreResult<Vec<CatalogMovie>> {
        let movies = self.store.list_movies().await?;
        let mut out = Vec::with_capacity(movies.len());
        for movie in movies {
            let actor = self.resolver.resolve(movie.actor_id.as_deref()).await?;
            out.push(CatalogMovie { movie, actor });
        }
        Ok(out)
    }

    pub async fn get_movie(&self, id: &str) -> StoreResult<Option<CatalogMovie>> {
        let Some(movie) = self.store.movie_by_id(id).await? else {
            return Ok(None);
        };
        let actor = self.resolver.resolve(movie.actor_id.as_deref()).await?;
        Ok(Some(CatalogMovie { movie, actor }))
    }

    /// Create a movie, or read instead for anonymous callers.
    ///
    /// With an identity present: upsert the named actor, create the
    /// movie against the canonical actor id, publish one `movieAdded`
    /// event, and return just the new movie. Without one: no write
    /// happens and the full current list is returned. The anonymous
    /// fallback is a preserved contract of the original API.
    pub async fn add_movie(
        &self,
        draft: MovieDraft,
        caller: Option<&CallerIdentity>,
    ) -> StoreResult<Vec<CatalogMovie>> {
        if caller.is_none() {
            tracing::debug!(title = %draft.title, "anonymous addMovie, returning list");
            return self.list_movies().await;
        }

        let actor = match draft.actor.as_deref() {
            Some(name) => Some(self.store.upsert_actor(name).await?),
            None => None,
        };

        let movie = self
            .store
            .create_movie(NewMovie {
                title: draft.title,
                release_date: draft.release_date,
                rating: draft.rating,
                status: draft.status.unwrap_or_default(),
                actor_id: actor.as_ref().map(|a| a.id.clone()),
            })
            .await?;

        let entry = CatalogMovie { movie, actor };
        self.notifier.publish(MOVIE_ADDED, entry.clone()).await;
        Ok(vec![entry])
    }
}
