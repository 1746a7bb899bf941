use secrecy::{ExposeSecret, Secret};
use sqlx::{postgres::PgPoolOptions, PgPool};

use domain::{SeedError, SeedStore};
use services::seeder::{SeedReport, Seeder};
use utils::constants::MAX_DB_CONNECTIONS;

pub mod domain;
pub mod services;
pub mod utils;

/// Runs the seeder and releases the store connection afterwards, whether or
/// not the run succeeded.
pub async fn seed_and_disconnect<S: SeedStore + ?Sized>(
    seeder: &Seeder,
    store: &mut S,
) -> Result<SeedReport, SeedError> {
    let outcome = seeder.run(store).await;
    store.disconnect().await;
    outcome
}

pub async fn get_postgres_pool(
    url: &Secret<String>,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(MAX_DB_CONNECTIONS)
        .connect(url.expose_secret())
        .await
}
