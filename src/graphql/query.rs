use std::sync::Arc;

use async_graphql::{Context, ID, Object, Result};

use crate::catalog::CatalogService;
use crate::graphql::types::Movie;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// List every movie in the catalog.
    async fn movies(&self, ctx: &Context<'_>) -> Result<Vec<Movie>> {
        let catalog = ctx.data::<Arc<CatalogService>>()?;
        let movies = catalog.list_movies().await?;
        Ok(movies.into_iter().map(Movie::from).collect())
    }

    /// Fetch one movie by id; null when the id is unknown.
    async fn movie(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Movie>> {
        let catalog = ctx.data::<Arc<CatalogService>>()?;
        Ok(catalog.get_movie(&id).await?.map(Movie::from))
    }
}
