//! Fixtures shared by unit tests.

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::database::models::{Employee, EmployeeRole, Team, TeamMember, TeamType, Tenant};
use crate::directory::{DirectoryError, DirectoryStore};
use crate::orgchart::OrganizationChartNode;

/// Active internal employee on the "Engineering" team
pub fn employee(
    id: &str,
    role: &str,
    first_name: &str,
    last_name: &str,
    reports_to: Option<&str>,
) -> Employee {
    Employee {
        id: id.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: Some(format!("{}.{}@example.com", first_name, last_name).to_lowercase()),
        role: EmployeeRole::from(role),
        title: None,
        reports_to_id: reports_to.map(str::to_string),
        team_name: Some("Engineering".to_string()),
        team_type: Some(TeamType::Internal),
        profile_image_url: None,
        is_active: true,
    }
}

/// Ids of a list of nodes, in order
pub fn ids(nodes: &[OrganizationChartNode]) -> Vec<&str> {
    nodes.iter().map(|node| node.id.as_str()).collect()
}

pub fn team(name: &str, team_type: TeamType, is_active: bool) -> Team {
    let now = Utc::now();
    Team {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: None,
        team_type,
        is_active,
        created_at: now,
        updated_at: now,
    }
}

/// Active member row, optionally on a team and reporting to another member
pub fn member(
    first_name: &str,
    last_name: &str,
    role: EmployeeRole,
    team: Option<&Team>,
    reports_to: Option<&TeamMember>,
) -> TeamMember {
    let now = Utc::now();
    TeamMember {
        id: Uuid::new_v4(),
        team_id: team.map(|t| t.id),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: None,
        role,
        title: None,
        reports_to_id: reports_to.map(|m| m.id),
        profile_image_url: None,
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

pub fn tenant() -> Tenant {
    Tenant {
        id: Uuid::new_v4(),
        name: "acme".to_string(),
        database: "tenant_acme".to_string(),
        is_active: true,
    }
}

/// Store whose every query fails as if the tenant database were unreachable
pub struct FailingDirectoryStore;

#[async_trait]
impl DirectoryStore for FailingDirectoryStore {
    async fn active_employees(&self) -> Result<Vec<Employee>, DirectoryError> {
        Err(DirectoryError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn list_teams(&self, _include_inactive: bool) -> Result<Vec<Team>, DirectoryError> {
        Err(DirectoryError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn team_members(&self, _team_id: Uuid) -> Result<Vec<TeamMember>, DirectoryError> {
        Err(DirectoryError::Database(sqlx::Error::PoolTimedOut))
    }
}
