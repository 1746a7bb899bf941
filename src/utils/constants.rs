use dotenvy::dotenv;
use lazy_static::lazy_static;
use secrecy::Secret;
use std::env as std_env;

lazy_static! {
    pub static ref DATABASE_URL: Secret<String> = get_db_url();
}

fn load_env() {
    dotenv().ok();
}

fn get_db_url() -> Secret<String> {
    load_env();
    let db_url = std_env::var(env::DATABASE_URL_ENV_VAR)
        .expect("DATABASE_URL must be set.");
    if db_url.is_empty() {
        panic!("DATABASE_URL must not be empty.");
    }
    Secret::new(db_url)
}

pub mod env {
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
}

pub const MAX_DB_CONNECTIONS: u32 = 5;
pub const DEFAULT_LOG_FILTER: &str = "info";

pub mod seed {
    /// `(name, role)`; the last two fail validation on purpose.
    pub const MEMBERS: &[(&str, &str)] = &[
        ("John Doe", "backend"),
        ("Jane Smith", "UI/UX"),
        ("", "backend"),
        ("Invalid Role User", "manager"),
    ];

    pub const PROJECTS: &[(&str, &str)] = &[
        ("Health App", "A project for tracking health metrics."),
        ("E-commerce Platform", "An online shopping website."),
    ];

    /// `(member index, project index, assigned at)`
    pub const ASSIGNMENTS: &[(usize, usize, &str)] = &[
        (0, 0, "2025-01-01T10:00:00Z"),
        (0, 1, "2025-01-01T10:00:00Z"),
        (1, 0, "2025-01-02T15:30:00Z"),
    ];
}
