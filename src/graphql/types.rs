use async_graphql::{ID, InputObject, SimpleObject};

use crate::graphql::scalar::Date;
use crate::models;
use crate::models::Status;

/// A movie with its actor reference already materialized.
#[derive(SimpleObject, Clone, Debug)]
pub struct Movie {
    pub id: ID,
    pub title: String,
    pub release_date: Option<Date>,
    pub rating: Option<i32>,
    pub status: Status,
    pub actor: Option<Actor>,
}

#[derive(SimpleObject, Clone, Debug)]
pub struct Actor {
    pub id: ID,
    pub name: String,
}

/// Input for `addMovie`. The actor carries a name only: existing
/// actors cannot be targeted by id through this input.
#[derive(InputObject, Clone, Debug)]
pub struct MovieInput {
    pub title: String,
    pub release_date: Option<Date>,
    pub rating: Option<i32>,
    pub status: Option<Status>,
    pub actor: Option<ActorInput>,
}

#[derive(InputObject, Clone, Debug)]
pub struct ActorInput {
    pub name: String,
}

impl From<models::CatalogMovie> for Movie {
    fn from(entry: models::CatalogMovie) -> Self {
        Movie {
            id: ID(entry.movie.id),
            title: entry.movie.title,
            release_date: entry.movie.release_date.map(Date),
            rating: entry.movie.rating,
            status: entry.movie.status,
            actor: entry.actor.map(Actor::from),
        }
    }
}

impl From<models::Actor> for Actor {
    fn from(actor: models::Actor) -> Self {
        Actor { id: ID(actor.id), name: actor.name }
    }
}

impl From<MovieInput> for models::MovieDraft {
    fn from(input: MovieInput) -> Self {
        models::MovieDraft {
            title: input.title,
            release_date: input.release_date.map(|d| d.0),
            rating: input.rating,
            status: input.status,
            actor: input.actor.map(|a| a.name),
        }
    }
}
