//! CompDB
//!
//! HTTP service for a competition database: registers teams and lists them
//! from a MySQL `teams` table.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::{AppState, TeamServiceTrait};
use infrastructure::storage::StorageHandle;
use infrastructure::team::{MySqlTeamRepository, TeamService};

/// Create the application state on top of an open storage handle
pub fn create_app_state(storage: &StorageHandle) -> AppState {
    let team_service: Arc<dyn TeamServiceTrait> = match storage {
        StorageHandle::InMemory(repository) => Arc::new(TeamService::new(repository.clone())),
        StorageHandle::MySql(pool) => Arc::new(TeamService::new(Arc::new(
            MySqlTeamRepository::new(pool.clone()),
        ))),
    };

    AppState::new(team_service)
}
