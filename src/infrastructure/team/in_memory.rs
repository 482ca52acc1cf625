//! In-memory team repository

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::team::{NewTeam, Team, TeamId, TeamRepository};
use crate::domain::DomainError;

#[derive(Debug, Default)]
struct TeamTable {
    rows: Vec<Team>,
    last_id: i64,
}

/// Thread-safe in-memory team store
///
/// Ids are assigned sequentially from 1, like an auto-increment column.
/// Data is lost when the process terminates.
#[derive(Debug, Default)]
pub struct InMemoryTeamRepository {
    table: RwLock<TeamTable>,
}

impl InMemoryTeamRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn list(&self) -> Result<Vec<Team>, DomainError> {
        let table = self
            .table
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(table.rows.clone())
    }

    async fn insert(&self, team: &NewTeam) -> Result<TeamId, DomainError> {
        let mut table = self
            .table
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        table.last_id += 1;
        let id = TeamId::new(table.last_id);
        table.rows.push(team.clone().into_team(id));

        Ok(id)
    }

    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let repo = InMemoryTeamRepository::new();

        let first = repo.insert(&NewTeam::new("Falcons").unwrap()).await.unwrap();
        let second = repo.insert(&NewTeam::new("Hawks").unwrap()).await.unwrap();

        assert_eq!(first.value(), 1);
        assert_eq!(second.value(), 2);
    }

    #[tokio::test]
    async fn test_list_returns_inserted_rows() {
        let repo = InMemoryTeamRepository::new();
        assert!(repo.list().await.unwrap().is_empty());

        repo.insert(&NewTeam::new("Falcons").unwrap()).await.unwrap();
        repo.insert(&NewTeam::new("Hawks").unwrap()).await.unwrap();

        let teams = repo.list().await.unwrap();
        assert_eq!(teams.len(), 2);
        assert!(teams.iter().any(|t| t.name() == "Falcons"));
        assert!(teams.iter().all(|t| t.comp_id().value() == 1 && t.score() == 0));
    }

    #[tokio::test]
    async fn test_duplicate_names_get_distinct_ids() {
        let repo = InMemoryTeamRepository::new();
        let team = NewTeam::new("Falcons").unwrap();

        let a = repo.insert(&team).await.unwrap();
        let b = repo.insert(&team).await.unwrap();

        assert_ne!(a, b);
        assert_eq!(repo.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_ping() {
        assert!(InMemoryTeamRepository::new().ping().await.is_ok());
    }
}
