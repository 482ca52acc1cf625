//! Application state for shared services

use std::sync::Arc;

use crate::domain::team::{Team, TeamId, TeamRepository};
use crate::domain::DomainError;
use crate::infrastructure::team::TeamService;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub team_service: Arc<dyn TeamServiceTrait>,
}

/// Trait for team service operations
#[async_trait::async_trait]
pub trait TeamServiceTrait: Send + Sync {
    async fn list(&self) -> Result<Vec<Team>, DomainError>;
    async fn add(&self, name: Option<String>) -> Result<TeamId, DomainError>;
    async fn ping(&self) -> Result<(), DomainError>;
}

#[async_trait::async_trait]
impl<R: TeamRepository + 'static> TeamServiceTrait for TeamService<R> {
    async fn list(&self) -> Result<Vec<Team>, DomainError> {
        TeamService::list(self).await
    }

    async fn add(&self, name: Option<String>) -> Result<TeamId, DomainError> {
        TeamService::add(self, name).await
    }

    async fn ping(&self) -> Result<(), DomainError> {
        TeamService::ping(self).await
    }
}

impl AppState {
    /// Create new application state with provided services
    pub fn new(team_service: Arc<dyn TeamServiceTrait>) -> Self {
        Self { team_service }
    }

    /// Build state over any team repository
    pub fn from_repository<R: TeamRepository + 'static>(repository: Arc<R>) -> Self {
        Self::new(Arc::new(TeamService::new(repository)))
    }
}
