//! Read access to the team directory (`teams` / `team_members`).

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::database::models::{Employee, Team, TeamMember};
use crate::database::DatabaseError;

pub mod memory;
pub mod postgres;

pub use memory::MemoryDirectoryStore;
pub use postgres::PgDirectoryStore;

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Database manager error: {0}")]
    DatabaseManager(#[from] DatabaseError),
    #[error("Team not found: {0}")]
    TeamNotFound(Uuid),
}

#[async_trait]
pub trait DirectoryStore: Send + Sync {
    /// Active members of active teams (members without a team included),
    /// joined with their team, in creation order.
    async fn active_employees(&self) -> Result<Vec<Employee>, DirectoryError>;

    async fn list_teams(&self, include_inactive: bool) -> Result<Vec<Team>, DirectoryError>;

    /// Active members of one team, in creation order
    async fn team_members(&self, team_id: Uuid) -> Result<Vec<TeamMember>, DirectoryError>;
}

/// Project a member row and its (optional) team into the chart input shape
pub fn employee_from_member(member: &TeamMember, team: Option<&Team>) -> Employee {
    Employee {
        id: member.id.to_string(),
        first_name: member.first_name.clone(),
        last_name: member.last_name.clone(),
        email: member.email.clone(),
        role: member.role.clone(),
        title: member.title.clone(),
        reports_to_id: member.reports_to_id.map(|id| id.to_string()),
        team_name: team.map(|t| t.name.clone()),
        team_type: team.map(|t| t.team_type),
        profile_image_url: member.profile_image_url.clone(),
        is_active: member.is_active,
    }
}
