use std::sync::Arc;

use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use kinograph::catalog::CatalogService;
use kinograph::config::{Config, StoreBackend};
use kinograph::notify::ChangeNotifier;
use kinograph::store::{CatalogStore, DbStore, MemoryStore};
use kinograph::{db, graphql, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,kinograph=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Config::from_env()?;

    let store: Arc<dyn CatalogStore> = match config.store_backend {
        StoreBackend::Memory => Arc::new(MemoryStore::new()),
        StoreBackend::Database => {
            let db = db::connect_and_migrate(&config.database_url).await?;
            Arc::new(DbStore::new(db))
        }
    };
    tracing::info!(backend = ?config.store_backend, "store ready");

    let notifier = Arc::new(ChangeNotifier::new());
    let catalog = Arc::new(CatalogService::new(store, notifier));
    let schema = graphql::build_schema(catalog);

    let app = server::router(schema)
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
