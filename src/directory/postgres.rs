use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};
use uuid::Uuid;

use crate::database::models::{Employee, EmployeeRole, Team, TeamMember, TeamType};

use super::{DirectoryError, DirectoryStore};

/// Directory store backed by a tenant's PostgreSQL database
pub struct PgDirectoryStore {
    pool: PgPool,
}

impl PgDirectoryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DirectoryStore for PgDirectoryStore {
    async fn active_employees(&self) -> Result<Vec<Employee>, DirectoryError> {
        let rows = sqlx::query(
            r#"
            SELECT
                m.id::text AS id,
                m.first_name,
                m.last_name,
                m.email,
                m.role,
                m.title,
                m.reports_to_id::text AS reports_to_id,
                m.profile_image_url,
                m.is_active,
                t.name AS team_name,
                t.team_type
            FROM team_members m
            LEFT JOIN teams t ON t.id = m.team_id
            WHERE m.is_active = true
            AND (t.id IS NULL OR t.is_active = true)
            ORDER BY m.created_at, m.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let employees = rows.iter().map(employee_from_row).collect::<Result<Vec<_>, _>>()?;
        tracing::debug!("Loaded {} active employees", employees.len());
        Ok(employees)
    }

    async fn list_teams(&self, include_inactive: bool) -> Result<Vec<Team>, DirectoryError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, description, team_type, is_active, created_at, updated_at
            FROM teams
            WHERE ($1 OR is_active = true)
            ORDER BY name
            "#,
        )
        .bind(include_inactive)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(team_from_row).collect::<Result<Vec<_>, _>>()?)
    }

    async fn team_members(&self, team_id: Uuid) -> Result<Vec<TeamMember>, DirectoryError> {
        let exists: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM teams WHERE id = $1")
            .bind(team_id)
            .fetch_one(&self.pool)
            .await?;
        if exists.0 == 0 {
            return Err(DirectoryError::TeamNotFound(team_id));
        }

        let rows = sqlx::query(
            r#"
            SELECT id, team_id, first_name, last_name, email, role, title,
                   reports_to_id, profile_image_url, is_active, created_at, updated_at
            FROM team_members
            WHERE team_id = $1 AND is_active = true
            ORDER BY created_at, id
            "#,
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(member_from_row).collect::<Result<Vec<_>, _>>()?)
    }
}

fn employee_from_row(row: &PgRow) -> Result<Employee, sqlx::Error> {
    Ok(Employee {
        id: row.try_get("id")?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        email: row.try_get("email")?,
        role: EmployeeRole::from(row.try_get::<String, _>("role")?),
        title: row.try_get("title")?,
        reports_to_id: row.try_get("reports_to_id")?,
        team_name: row.try_get("team_name")?,
        team_type: row.try_get::<Option<String>, _>("team_type")?.map(TeamType::from),
        profile_image_url: row.try_get("profile_image_url")?,
        is_active: row.try_get("is_active")?,
    })
}

fn team_from_row(row: &PgRow) -> Result<Team, sqlx::Error> {
    Ok(Team {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        team_type: TeamType::from(row.try_get::<String, _>("team_type")?),
        is_active: row.try_get("is_active")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

fn member_from_row(row: &PgRow) -> Result<TeamMember, sqlx::Error> {
    Ok(TeamMember {
        id: row.try_get("id")?,
        team_id: row.try_get("team_id")?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        email: row.try_get("email")?,
        role: EmployeeRole::from(row.try_get::<String, _>("role")?),
        title: row.try_get("title")?,
        reports_to_id: row.try_get("reports_to_id")?,
        profile_image_url: row.try_get("profile_image_url")?,
        is_active: row.try_get("is_active")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}
