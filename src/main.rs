use color_eyre::eyre::{Result, WrapErr};
use team_seeder::{
    get_postgres_pool, seed_and_disconnect,
    services::{
        data_stores::PostgresSeedStore, reporter::report_lines,
        seeder::Seeder,
    },
    utils::{constants::DATABASE_URL, tracing::init_tracing},
};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    // Once the pool exists, the only exit is through seed_and_disconnect
    let seeder = Seeder::from_fixtures()?;

    let pool = get_postgres_pool(&DATABASE_URL)
        .await
        .wrap_err("Failed to create Postgres connection pool")?;
    tracing::info!("Connected to database");
    let mut store = PostgresSeedStore::new(pool);

    let report = seed_and_disconnect(&seeder, &mut store)
        .await
        .wrap_err("Seeding aborted")?;

    println!("Member Assignments:");
    for line in report_lines(&report.assignments) {
        println!("{line}");
    }

    tracing::info!(
        members = report.members.len(),
        rejected = report.rejected_members,
        projects = report.projects.len(),
        assignments = report.assignments.len(),
        "Seed completed"
    );

    Ok(())
}
