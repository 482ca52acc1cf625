//! Schema migrations for the MySQL store

use sqlx::mysql::MySqlPool;
use tracing::info;

use crate::domain::DomainError;

/// Represents a database migration
#[derive(Debug, Clone)]
pub struct Migration {
    pub version: i64,
    pub description: String,
    pub up: String,
}

impl Migration {
    pub fn new(version: i64, description: impl Into<String>, up: impl Into<String>) -> Self {
        Self {
            version,
            description: description.into(),
            up: up.into(),
        }
    }
}

/// Applies migrations once each, recording them in `_migrations`
#[derive(Debug)]
pub struct MySqlMigrator {
    pool: MySqlPool,
}

impl MySqlMigrator {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn ensure_migrations_table(&self) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS _migrations (
                version BIGINT PRIMARY KEY,
                description VARCHAR(255) NOT NULL,
                installed_on TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create migrations table: {}", e)))?;

        Ok(())
    }

    /// Runs a single migration unless it was applied before
    pub async fn run_migration(&self, migration: &Migration) -> Result<bool, DomainError> {
        self.ensure_migrations_table().await?;

        let applied: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _migrations WHERE version = ?")
            .bind(migration.version)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to check migration status: {}", e)))?;

        if applied > 0 {
            return Ok(false);
        }

        sqlx::query(&migration.up)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::storage(format!(
                    "Failed to run migration {}: {}",
                    migration.version, e
                ))
            })?;

        sqlx::query("INSERT INTO _migrations (version, description) VALUES (?, ?)")
            .bind(migration.version)
            .bind(&migration.description)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::storage(format!(
                    "Failed to record migration {}: {}",
                    migration.version, e
                ))
            })?;

        Ok(true)
    }
}

/// Migrations for the team store, in ascending version order
pub fn team_migrations() -> Vec<Migration> {
    vec![Migration::new(
        1,
        "Create teams table",
        r#"
        CREATE TABLE IF NOT EXISTS teams (
            id INT NOT NULL AUTO_INCREMENT PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            comp_id INT NOT NULL,
            created_at DATETIME NOT NULL,
            score INT NOT NULL DEFAULT 0
        )
        "#,
    )]
}

/// Runs all pending team store migrations
pub async fn run_migrations(pool: &MySqlPool) -> Result<(), DomainError> {
    let migrator = MySqlMigrator::new(pool.clone());

    for migration in team_migrations() {
        if migrator.run_migration(&migration).await? {
            info!(version = migration.version, description = %migration.description, "Applied migration");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migration_creation() {
        let migration = Migration::new(1, "Test migration", "CREATE TABLE test (id INT)");

        assert_eq!(migration.version, 1);
        assert_eq!(migration.description, "Test migration");
        assert_eq!(migration.up, "CREATE TABLE test (id INT)");
    }

    #[test]
    fn test_team_migrations_order() {
        let migrations = team_migrations();

        assert!(!migrations.is_empty());

        for pair in migrations.windows(2) {
            assert!(pair[1].version > pair[0].version);
        }
    }

    #[test]
    fn test_teams_table_columns() {
        let migrations = team_migrations();
        let create = &migrations[0].up;

        for column in ["id", "name", "comp_id", "created_at", "score"] {
            assert!(create.contains(column), "missing column {}", column);
        }
        assert!(create.contains("AUTO_INCREMENT"));
    }
}
