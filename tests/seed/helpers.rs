use secrecy::ExposeSecret;
use sqlx::{
    postgres::{PgConnectOptions, PgConnection, PgPoolOptions},
    Connection, Executor, PgPool,
};
use std::str::FromStr;
use team_seeder::{
    services::data_stores::PostgresSeedStore, utils::constants::DATABASE_URL,
};
use test_context::AsyncTestContext;
use uuid::Uuid;

pub struct TestDb {
    pub pool: PgPool,
    pub tmp_db_name: String,
}

impl TestDb {
    pub async fn new() -> Self {
        let tmp_db_name = Uuid::new_v4().to_string();
        configure_database(&tmp_db_name).await;
        let pool = connect(&tmp_db_name).await;

        Self { pool, tmp_db_name }
    }

    /// A store with its own pool, so closing it leaves `self.pool` usable.
    pub async fn new_store(&self) -> PostgresSeedStore {
        PostgresSeedStore::new(connect(&self.tmp_db_name).await)
    }

    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count rows")
    }

    /// Inserts a member, a project and an assignment between them directly,
    /// bypassing the seeder.
    pub async fn insert_stale_assignment(&self) {
        let member_id: i32 = sqlx::query_scalar(
            "INSERT INTO member (name, role) VALUES ('Ted', 'frontend') RETURNING id",
        )
        .fetch_one(&self.pool)
        .await
        .expect("Failed to insert member");
        let project_id: i32 = sqlx::query_scalar(
            "INSERT INTO project (name, description) VALUES ('Parish', 'Craggy Island') RETURNING id",
        )
        .fetch_one(&self.pool)
        .await
        .expect("Failed to insert project");
        sqlx::query(
            "INSERT INTO member_projects (member_id, project_id) VALUES ($1, $2)",
        )
        .bind(member_id)
        .bind(project_id)
        .execute(&self.pool)
        .await
        .expect("Failed to insert assignment");
    }
}

impl AsyncTestContext for TestDb {
    async fn setup() -> TestDb {
        TestDb::new().await
    }

    async fn teardown(self) {
        self.pool.close().await;
        delete_database(&self.tmp_db_name).await;
    }
}

fn base_options() -> PgConnectOptions {
    PgConnectOptions::from_str(DATABASE_URL.expose_secret())
        .expect("Failed to parse PostgreSQL connection string")
}

async fn connect(db_name: &str) -> PgPool {
    PgPoolOptions::new()
        .max_connections(2)
        .connect_with(base_options().database(db_name))
        .await
        .expect("Failed to create Postgres connection pool.")
}

async fn configure_database(db_name: &str) {
    let mut connection = PgConnection::connect_with(&base_options())
        .await
        .expect("Failed to connect to Postgres");

    connection
        .execute(format!(r#"CREATE DATABASE "{}";"#, db_name).as_str())
        .await
        .expect("Failed to create database.");

    let pool = connect(db_name).await;
    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to migrate the database");
    pool.close().await;
}

async fn delete_database(db_name: &str) {
    let mut connection = PgConnection::connect_with(&base_options())
        .await
        .expect("Failed to connect to Postgres");

    // Kill any active connections to the database
    connection
        .execute(
            format!(
                r#"
                SELECT pg_terminate_backend(pg_stat_activity.pid)
                FROM pg_stat_activity
                WHERE pg_stat_activity.datname = '{}'
                  AND pid <> pg_backend_pid();
        "#,
                db_name
            )
            .as_str(),
        )
        .await
        .expect("Failed to terminate connections.");

    connection
        .execute(format!(r#"DROP DATABASE "{}";"#, db_name).as_str())
        .await
        .expect("Failed to drop the database.");
}
