//! MySQL connection pool setup

use std::time::Duration;

use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};

use crate::config::DatabaseConfig;

/// Build connect options from the recognized database settings
pub fn connect_options(config: &DatabaseConfig) -> MySqlConnectOptions {
    MySqlConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.database)
}

/// Create a pool that holds its connections for the whole process lifetime.
///
/// The pool connects lazily so the server can start while the store is
/// down; requests fail with a storage error until it comes back.
pub fn create_pool(config: &DatabaseConfig) -> MySqlPool {
    MySqlPoolOptions::new()
        .max_connections(config.max_connections.max(1))
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_lazy_with(connect_options(config))
}
