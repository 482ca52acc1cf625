//! Storage factory for runtime backend selection

use std::sync::Arc;

use sqlx::mysql::MySqlPool;
use tracing::{error, info};

use crate::config::DatabaseConfig;
use crate::domain::DomainError;
use crate::infrastructure::team::InMemoryTeamRepository;

use super::migrations::run_migrations;
use super::mysql::create_pool;

/// Supported storage types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    /// In-memory storage (for testing/development)
    InMemory,
    /// MySQL / MariaDB storage
    MySql,
}

impl StorageType {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "memory" | "inmemory" | "in-memory" | "in_memory" => Some(Self::InMemory),
            "mysql" | "mariadb" => Some(Self::MySql),
            _ => None,
        }
    }
}

/// Owned handle to the team store.
///
/// Created once at startup, shared with the services built on top of it,
/// and closed after the server stops accepting requests.
#[derive(Debug, Clone)]
pub enum StorageHandle {
    InMemory(Arc<InMemoryTeamRepository>),
    MySql(MySqlPool),
}

impl StorageHandle {
    /// Bring the schema up to date. A no-op for the in-memory backend.
    pub async fn run_migrations(&self) -> Result<(), DomainError> {
        match self {
            Self::InMemory(_) => Ok(()),
            Self::MySql(pool) => run_migrations(pool).await,
        }
    }

    /// Release the store connection
    pub async fn close(&self) {
        if let Self::MySql(pool) = self {
            pool.close().await;
            info!("MySQL connection closed");
        }
    }
}

/// Factory for creating storage handles
#[derive(Debug)]
pub struct StorageFactory;

impl StorageFactory {
    /// Open the backend named in the configuration.
    ///
    /// An unreachable MySQL server is logged but does not fail startup.
    pub async fn connect(config: &DatabaseConfig) -> Result<StorageHandle, DomainError> {
        let storage_type = StorageType::from_str(&config.backend).ok_or_else(|| {
            DomainError::configuration(format!("Unknown storage backend '{}'", config.backend))
        })?;

        info!("Storage backend: {:?}", storage_type);

        match storage_type {
            StorageType::InMemory => Ok(StorageHandle::InMemory(Arc::new(
                InMemoryTeamRepository::new(),
            ))),
            StorageType::MySql => {
                let pool = create_pool(config);

                match sqlx::query("SELECT 1").execute(&pool).await {
                    Ok(_) => info!(
                        host = %config.host,
                        port = config.port,
                        database = %config.database,
                        "Connected to MySQL"
                    ),
                    Err(e) => error!(error = %e, "Database connection error"),
                }

                Ok(StorageHandle::MySql(pool))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_type_from_str() {
        assert_eq!(StorageType::from_str("memory"), Some(StorageType::InMemory));
        assert_eq!(StorageType::from_str("In-Memory"), Some(StorageType::InMemory));
        assert_eq!(StorageType::from_str("mysql"), Some(StorageType::MySql));
        assert_eq!(StorageType::from_str("MariaDB"), Some(StorageType::MySql));
        assert_eq!(StorageType::from_str("postgres"), None);
    }

    #[tokio::test]
    async fn test_connect_in_memory() {
        let config = DatabaseConfig {
            backend: "memory".to_string(),
            ..Default::default()
        };

        let handle = StorageFactory::connect(&config).await.unwrap();
        assert!(matches!(handle, StorageHandle::InMemory(_)));
        handle.run_migrations().await.unwrap();
        handle.close().await;
    }

    #[tokio::test]
    async fn test_connect_unknown_backend() {
        let config = DatabaseConfig {
            backend: "cassandra".to_string(),
            ..Default::default()
        };

        let result = StorageFactory::connect(&config).await;
        assert!(matches!(result, Err(DomainError::Configuration { .. })));
    }
}
