pub mod memory;
pub mod postgres;
pub mod repository;
pub mod seed;

pub use memory::InMemoryRepository;
pub use postgres::{create_pool, run_migrations, PgTasteRepository};
pub use repository::TasteRepository;
pub use seed::{seed_catalog, seed_if_empty};
