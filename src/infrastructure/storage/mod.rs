//! Storage infrastructure - backend selection, connection and schema

mod factory;
pub mod migrations;
pub mod mysql;

pub use factory::{StorageFactory, StorageHandle, StorageType};
pub use migrations::{run_migrations, Migration, MySqlMigrator};
