//! Team validation

use thiserror::Error;

/// Errors that can occur during team validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TeamValidationError {
    #[error("Team name required")]
    EmptyName,
}

/// Validate a team name
///
/// Only emptiness is checked here. Length and character limits belong to the
/// `teams` column definition and surface as storage errors.
pub fn validate_team_name(name: &str) -> Result<(), TeamValidationError> {
    if name.is_empty() {
        return Err(TeamValidationError::EmptyName);
    }

    Ok(())
}
