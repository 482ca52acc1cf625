//! Domain layer - Core entities and repository contracts

pub mod error;
pub mod team;

pub use error::DomainError;
pub use team::{CompetitionId, NewTeam, Team, TeamId, TeamRepository};
