//! Movie-catalog GraphQL service.
//!
//! A small data-access core with pluggable storage and real-time change
//! notification: a [`store::CatalogStore`] with in-memory and database
//! backends, an actor [`resolve::ActorResolver`], a broadcast
//! [`notify::ChangeNotifier`], and the [`catalog::CatalogService`] that
//! ties them together behind the GraphQL schema in [`graphql`].

pub mod catalog;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod graphql;
pub mod models;
pub mod notify;
pub mod resolve;
pub mod server;
pub mod store;
