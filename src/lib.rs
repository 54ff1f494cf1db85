use axum::{Extension, Router};
use deadpool::managed::Pool;
use diesel_async::{pooled_connection::AsyncDieselConnectionManager, AsyncPgConnection};
use std::path::Path;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod schema;
pub mod seed;
pub mod store;

use store::SharedStore;

pub type DbPool = Pool<AsyncDieselConnectionManager<AsyncPgConnection>>;

pub fn connect_to_db(db_url: &str, max_size: usize) -> anyhow::Result<DbPool> {
    let db_config = AsyncDieselConnectionManager::<AsyncPgConnection>::new(db_url);
    Pool::builder(db_config)
        .max_size(max_size)
        .build()
        .map_err(|e| anyhow::anyhow!("failed to build database pool: {e}"))
}

/// The whole application: the JSON api under `/api` and the client bundle
/// everywhere else.
pub fn app(store: SharedStore, client_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .nest("/api", api::app())
        .merge(client::app(client_dir))
        .layer(Extension(store))
        .layer(TraceLayer::new_for_http())
}
