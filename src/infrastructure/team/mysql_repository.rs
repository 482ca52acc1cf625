//! MySQL team repository implementation

use async_trait::async_trait;
use sqlx::mysql::{MySqlPool, MySqlRow};
use sqlx::Row;

use crate::domain::team::{CompetitionId, NewTeam, Team, TeamId, TeamRepository};
use crate::domain::DomainError;

/// MySQL implementation of TeamRepository over the `teams` table
#[derive(Debug, Clone)]
pub struct MySqlTeamRepository {
    pool: MySqlPool,
}

impl MySqlTeamRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamRepository for MySqlTeamRepository {
    async fn list(&self) -> Result<Vec<Team>, DomainError> {
        let rows = sqlx::query("SELECT id, name, comp_id, score FROM teams")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(row_to_team).collect()
    }

    async fn insert(&self, team: &NewTeam) -> Result<TeamId, DomainError> {
        let result = sqlx::query(
            "INSERT INTO teams (name, comp_id, created_at, score) VALUES (?, ?, NOW(), ?)",
        )
        .bind(team.name())
        .bind(team.comp_id().value())
        .bind(team.score())
        .execute(&self.pool)
        .await?;

        let id = i64::try_from(result.last_insert_id()).map_err(|_| {
            DomainError::storage(format!(
                "Inserted id {} does not fit in a signed integer",
                result.last_insert_id()
            ))
        })?;

        Ok(TeamId::new(id))
    }

    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

fn row_to_team(row: &MySqlRow) -> Result<Team, DomainError> {
    Ok(Team::from_row(
        TeamId::new(get_int(row, "id")?),
        row.try_get::<String, _>("name")?,
        CompetitionId::new(get_int(row, "comp_id")?),
        get_int(row, "score")?,
    ))
}

// The table is owned outside this service, so integer columns may be signed
// or unsigned.
fn get_int(row: &MySqlRow, column: &str) -> Result<i64, DomainError> {
    if let Ok(value) = row.try_get::<i64, _>(column) {
        return Ok(value);
    }

    let value: u64 = row.try_get(column)?;
    i64::try_from(value).map_err(|_| {
        DomainError::storage(format!("Column '{}' value {} out of range", column, value))
    })
}
