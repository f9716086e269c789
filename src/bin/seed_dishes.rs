//! Populates the `dishes` table with the reference catalog.
//!
//! Safe to run repeatedly: nothing is inserted once the table has rows.

use tasterealm_api::{
    config::Config,
    db::{self, seed_if_empty, PgTasteRepository},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let pool = db::create_pool(&config.database_url, 1).await?;
    db::run_migrations(&pool).await?;

    let repository = PgTasteRepository::new(pool.clone());
    let inserted = seed_if_empty(&repository).await?;

    println!("Seeded {} dishes.", inserted);

    pool.close().await;
    Ok(())
}
