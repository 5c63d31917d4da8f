use std::sync::Arc;

use async_graphql::{Context, Result, Subscription};
use futures::{Stream, StreamExt};

use crate::catalog::{CatalogService, MOVIE_ADDED};
use crate::graphql::types::Movie;
use crate::notify;

pub struct SubscriptionRoot;

#[Subscription]
impl SubscriptionRoot {
    /// Push each newly created movie to the subscriber. Events start
    /// flowing from the moment of subscription; there is no replay.
    async fn movie_added(&self, ctx: &Context<'_>) -> Result<impl Stream<Item = Movie>> {
        let catalog = ctx.data::<Arc<CatalogService>>()?;
        let rx = catalog.notifier().subscribe(MOVIE_ADDED).await;
        Ok(notify::into_stream(rx).map(Movie::from))
    }
}
