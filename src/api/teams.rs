//! Team endpoints

use axum::extract::State;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, LenientJson};
use crate::domain::team::Team;

/// Request to add a team
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddTeamRequest {
    #[serde(default)]
    pub name: Option<String>,
}

/// Team as returned by `GET /teams`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamResponse {
    pub id: i64,
    pub name: String,
    pub comp_id: i64,
    pub score: i64,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id().value(),
            name: team.name().to_string(),
            comp_id: team.comp_id().value(),
            score: team.score(),
        }
    }
}

/// Confirmation returned by `POST /add-team`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddTeamResponse {
    pub message: String,
    pub id: i64,
}

/// GET /teams
pub async fn list_teams(
    State(state): State<AppState>,
) -> Result<Json<Vec<TeamResponse>>, ApiError> {
    debug!("Listing teams");

    let teams = state.team_service.list().await?;

    Ok(Json(teams.iter().map(TeamResponse::from).collect()))
}

/// POST /add-team
pub async fn add_team(
    State(state): State<AppState>,
    LenientJson(request): LenientJson<AddTeamRequest>,
) -> Result<Json<AddTeamResponse>, ApiError> {
    debug!(name = ?request.name, "Add team requested");

    let id = state.team_service.add(request.name).await?;

    Ok(Json(AddTeamResponse {
        message: "Team added".to_string(),
        id: id.value(),
    }))
}
