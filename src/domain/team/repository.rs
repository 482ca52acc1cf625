//! Team repository trait

use async_trait::async_trait;

use super::entity::{NewTeam, Team, TeamId};
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Repository for team persistence
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// List every team in store-defined order
    async fn list(&self) -> Result<Vec<Team>, DomainError>;

    /// Insert a team and return the id assigned by the store
    async fn insert(&self, team: &NewTeam) -> Result<TeamId, DomainError>;

    /// Check that the store is reachable
    async fn ping(&self) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_team_repository() {
        let mut mock = MockTeamRepository::new();
        mock.expect_insert().returning(|_| Ok(TeamId::new(5)));
        mock.expect_list().returning(|| Ok(Vec::new()));

        let team = NewTeam::new("Falcons").unwrap();
        assert_eq!(mock.insert(&team).await.unwrap(), TeamId::new(5));
        assert!(mock.list().await.unwrap().is_empty());
    }
}
