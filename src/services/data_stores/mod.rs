mod hashmap_seed_store;
mod postgres_seed_store;

pub use hashmap_seed_store::*;
pub use postgres_seed_store::*;
