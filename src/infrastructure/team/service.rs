//! Team service for registering and listing teams

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::domain::team::{NewTeam, Team, TeamId, TeamRepository, TeamValidationError};
use crate::domain::DomainError;

/// Team service
#[derive(Debug)]
pub struct TeamService<R: TeamRepository> {
    repository: Arc<R>,
}

impl<R: TeamRepository> TeamService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// List all teams
    pub async fn list(&self) -> Result<Vec<Team>, DomainError> {
        let teams = self.repository.list().await.inspect_err(|e| {
            error!(error = %e, "Failed to list teams");
        })?;

        debug!(count = teams.len(), "Listed teams");
        Ok(teams)
    }

    /// Register a team in the default competition with a zero score
    pub async fn add(&self, name: Option<String>) -> Result<TeamId, DomainError> {
        let name = name.ok_or(TeamValidationError::EmptyName)?;
        let team = NewTeam::new(name)?;

        info!(name = %team.name(), "Adding team");

        let id = self.repository.insert(&team).await.inspect_err(|e| {
            error!(name = %team.name(), error = %e, "Failed to add team");
        })?;

        info!(team_id = %id, "Team added");
        Ok(id)
    }

    /// Check the store is reachable
    pub async fn ping(&self) -> Result<(), DomainError> {
        self.repository.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::team::MockTeamRepository;
    use crate::infrastructure::team::InMemoryTeamRepository;

    fn in_memory_service() -> TeamService<InMemoryTeamRepository> {
        TeamService::new(Arc::new(InMemoryTeamRepository::new()))
    }

    #[tokio::test]
    async fn test_add_and_list() {
        let service = in_memory_service();

        let id = service.add(Some("Falcons".to_string())).await.unwrap();
        assert_eq!(id.value(), 1);

        let teams = service.list().await.unwrap();
        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].id(), id);
        assert_eq!(teams[0].name(), "Falcons");
        assert_eq!(teams[0].comp_id().value(), 1);
        assert_eq!(teams[0].score(), 0);
    }

    #[tokio::test]
    async fn test_add_missing_name() {
        let service = in_memory_service();

        let result = service.add(None).await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_empty_name_skips_insert() {
        let mut mock = MockTeamRepository::new();
        mock.expect_insert().never();

        let service = TeamService::new(Arc::new(mock));
        let result = service.add(Some(String::new())).await;

        match result {
            Err(DomainError::Validation { message }) => assert_eq!(message, "Team name required"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_add_passes_fixed_defaults_to_store() {
        let mut mock = MockTeamRepository::new();
        mock.expect_insert()
            .withf(|team| team.name() == "Falcons" && team.comp_id().value() == 1 && team.score() == 0)
            .times(1)
            .returning(|_| Ok(TeamId::new(9)));

        let service = TeamService::new(Arc::new(mock));
        let id = service.add(Some("Falcons".to_string())).await.unwrap();

        assert_eq!(id.value(), 9);
    }

    #[tokio::test]
    async fn test_storage_errors_propagate() {
        let mut mock = MockTeamRepository::new();
        mock.expect_list()
            .returning(|| Err(DomainError::storage("Connection refused")));
        mock.expect_insert()
            .returning(|_| Err(DomainError::storage("Connection refused")));

        let service = TeamService::new(Arc::new(mock));

        assert!(matches!(service.list().await, Err(DomainError::Storage { .. })));
        assert!(matches!(
            service.add(Some("Falcons".to_string())).await,
            Err(DomainError::Storage { .. })
        ));
    }
}
