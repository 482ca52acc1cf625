//! Team entity and related types

use serde::{Deserialize, Serialize};

use super::validation::{validate_team_name, TeamValidationError};

/// Team identifier assigned by the store on insert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(i64);

impl TeamId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for TeamId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Competition a team is registered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompetitionId(i64);

impl CompetitionId {
    /// Every team is currently registered in competition 1
    pub const DEFAULT: Self = Self(1);

    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl Default for CompetitionId {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Team as read back from the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    id: TeamId,
    name: String,
    comp_id: CompetitionId,
    score: i64,
}

impl Team {
    /// Rehydrate a stored team row
    pub fn from_row(id: TeamId, name: impl Into<String>, comp_id: CompetitionId, score: i64) -> Self {
        Self {
            id,
            name: name.into(),
            comp_id,
            score,
        }
    }

    pub fn id(&self) -> TeamId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn comp_id(&self) -> CompetitionId {
        self.comp_id
    }

    pub fn score(&self) -> i64 {
        self.score
    }
}

/// A team that has not been persisted yet
///
/// Only obtainable through [`NewTeam::new`], so every insert carries the
/// default competition and a zero score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTeam {
    name: String,
    comp_id: CompetitionId,
    score: i64,
}

impl NewTeam {
    /// Validate the name and build an insertable team
    pub fn new(name: impl Into<String>) -> Result<Self, TeamValidationError> {
        let name = name.into();
        validate_team_name(&name)?;

        Ok(Self {
            name,
            comp_id: CompetitionId::DEFAULT,
            score: 0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn comp_id(&self) -> CompetitionId {
        self.comp_id
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    /// Attach the id assigned by the store
    pub fn into_team(self, id: TeamId) -> Team {
        Team {
            id,
            name: self.name,
            comp_id: self.comp_id,
            score: self.score,
        }
    }
}
