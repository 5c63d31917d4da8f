use jiff::Timestamp;

/// A catalog movie as held by the store. The actor link is a bare id;
/// materialization happens through the reference resolver.
#[derive(Clone, Debug, PartialEq)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub release_date: Option<Timestamp>,
    pub rating: Option<i32>,
    pub status: Status,
    pub actor_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Actor {
    pub id: String,
    pub name: String,
}

/// Fields for a movie about to be created; the store assigns the id.
#[derive(Clone, Debug)]
pub struct NewMovie {
    pub title: String,
    pub release_date: Option<Timestamp>,
    pub rating: Option<i32>,
    pub status: Status,
    pub actor_id: Option<String>,
}

/// Client-supplied movie fields, before the actor name has been
/// resolved to a record. The actor is addressed by name only.
#[derive(Clone, Debug)]
pub struct MovieDraft {
    pub title: String,
    pub release_date: Option<Timestamp>,
    pub rating: Option<i32>,
    pub status: Option<Status>,
    pub actor: Option<String>,
}

/// A movie with its actor reference materialized.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogMovie {
    pub movie: Movie,
    pub actor: Option<Actor>,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, async_graphql::Enum)]
pub enum Status {
    Watched,
    Interested,
    NotInterested,
    #[default]
    Unknown,
}

impl Status {
    pub fn as_code(self) -> i32 {
        match self {
            Status::Watched => 1,
            Status::Interested => 2,
            Status::NotInterested => 3,
            Status::Unknown => 0,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Status::Watched),
            2 => Some(Status::Interested),
            3 => Some(Status::NotInterested),
            0 => Some(Status::Unknown),
            _ => None,
        }
    }
}
