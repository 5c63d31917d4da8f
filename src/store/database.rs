use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::entities::{actor, movie};
use crate::error::{StoreError, StoreResult};
use crate::models::{Actor, Movie, NewMovie, Status};
use crate::store::{CatalogStore, fresh_id};

/// Database backend over sea-orm. The actor upsert rides on the unique
/// index over `actor.name`, so the insert-or-update is a single
/// statement at the engine.
#[derive(Clone)]
pub struct DbStore {
    db: DatabaseConnection,
}

impl DbStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CatalogStore for DbStore {
    async fn list_movies(&self) -> StoreResult<Vec<Movie>> {
        let rows = movie::Entity::find().all(&self.db).await?;
        Ok(rows.into_iter().map(Movie::from).collect())
    }

    async fn movie_by_id(&self, id: &str) -> StoreResult<Option<Movie>> {
        let row = movie::Entity::find_by_id(id.to_string()).one(&self.db).await?;
        Ok(row.map(Movie::from))
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

        let model = movie::ActiveModel {
            id: Set(movie.id.clone()),
            title: Set(movie.title.clone()),
            release_date: Set(movie.release_date.map(|ts| ts.as_second())),
            rating: Set(movie.rating),
            status: Set(movie.status.as_code()),
            actor_id: Set(movie.actor_id.clone()),
        };
        movie::Entity::insert(model).exec(&self.db).await?;

        tracing::debug!(id = %movie.id, title = %movie.title, "movie created");
        Ok(movie)
    }

    async fn actor_by_id(&self, id: &str) -> StoreResult<Option<Actor>> {
        let row = actor::Entity::find_by_id(id.to_string()).one(&self.db).await?;
        Ok(row.map(Actor::from))
    }

    async fn upsert_actor(&self, name: &str) -> StoreResult<Actor> {
        let model = actor::ActiveModel {
            id: Set(fresh_id()),
            name: Set(name.to_string()),
        };

        actor::Entity::insert(model)
            .on_conflict(
                sea_orm::sea_query::OnConflict::column(actor::Column::Name)
                    .update_columns([actor::Column::Name])
                    .to_owned(),
            )
            .exec(&self.db)
            .await?;

        // The row cannot vanish between the upsert and this read: no
        // delete path exists for actors.
        let row = actor::Entity::find()
            .filter(actor::Column::Name.eq(name))
            .one(&self.db)
            .await?
            .ok_or_else(|| {
                StoreError::Inconsistent(format!("actor '{name}' missing after upsert"))
            })?;

        Ok(Actor::from(row))
    }
}

impl From<movie::Model> for Movie {
    fn from(row: movie::Model) -> Self {
        Movie {
            id: row.id,
            title: row.title,
            release_date: row.release_date.and_then(|s| jiff::Timestamp::from_second(s).ok()),
            rating: row.rating,
            status: Status::from_code(row.status).unwrap_or(Status::Unknown),
            actor_id: row.actor_id,
        }
    }
}

impl From<actor::Model> for Actor {
    fn from(row: actor::Model) -> Self {
        Actor { id: row.id, name: row.name }
    }
}
