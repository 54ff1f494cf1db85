use axum::http::Method;
use club_signups::{config::Config, connect_to_db, store::PgStore};
use envconfig::Envconfig;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::init_from_env()?;
    let pool = connect_to_db(&config.database_url()?, config.db_pool_size)?;

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
        .allow_origin(Any);
    let store = Arc::new(PgStore::new(pool));
    let app = club_signups::app(store, &config.client_dir).layer(cors);

    tracing::info!(env = %config.app_env, port = config.port, "listening");
    axum::Server::bind(&([0, 0, 0, 0], config.port).into())
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
