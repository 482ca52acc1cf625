//! Team domain module
//!
//! A team is a competing entity registered in a competition. Teams are only
//! ever created and listed; nothing updates their score or competition.

mod entity;
mod repository;
mod validation;

pub use entity::{CompetitionId, NewTeam, Team, TeamId};
pub use repository::TeamRepository;
pub use validation::{validate_team_name, TeamValidationError};

#[cfg(test)]
pub use repository::MockTeamRepository;
