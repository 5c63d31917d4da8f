use std::sync::Arc;

use async_graphql::{Context, Object, Result};

use crate::catalog::{CallerIdentity, CatalogService};
use crate::graphql::types::{Movie, MovieInput};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Add a movie to the catalog.
    ///
    /// Authenticated callers get back a single-element list holding the
    /// new movie; anonymous callers trigger no write and get the full
    /// current list instead.
    async fn add_movie(&self, ctx: &Context<'_>, movie: MovieInput) -> Result<Vec<Movie>> {
        let catalog = ctx.data::<Arc<CatalogService>>()?;
        let caller = ctx.data_opt::<CallerIdentity>();

        let movies = catalog.add_movie(movie.into(), caller).await?;
        Ok(movies.into_iter().map(Movie::from).collect())
    }
}
