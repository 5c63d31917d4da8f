//! GraphQL surface of the catalog.
//!
//! Query and mutation resolvers delegate to the [`CatalogService`];
//! the `movieAdded` subscription is fed by the change notifier.

pub mod mutation;
pub mod query;
pub mod scalar;
pub mod subscription;
pub mod types;

use std::sync::Arc;

use async_graphql::Schema;

use crate::catalog::CatalogService;

use self::mutation::MutationRoot;
use self::query::QueryRoot;
use self::subscription::SubscriptionRoot;

pub type CatalogSchema = Schema<QueryRoot, MutationRoot, SubscriptionRoot>;

pub fn build_schema(catalog: Arc<CatalogService>) -> CatalogSchema {
    Schema::build(QueryRoot, MutationRoot, SubscriptionRoot)
        .data(catalog)
        .finish()
}
