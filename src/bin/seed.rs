use club_signups::{config::Config, connect_to_db, seed::seed, store::PgStore};
use envconfig::Envconfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::init_from_env()?;
    let pool = connect_to_db(&config.database_url()?, 1)?;

    seed(&PgStore::new(pool)).await?;
    Ok(())
}
