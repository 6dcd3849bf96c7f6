use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::employee::EmployeeRole;

/// Whether a team is staffed in-house or by an outside partner
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamType {
    #[default]
    Internal,
    External,
}

/// Anything that is not explicitly "external" is treated as internal
impl From<String> for TeamType {
    fn from(value: String) -> Self {
        if value.trim().eq_ignore_ascii_case("external") {
            TeamType::External
        } else {
            TeamType::Internal
        }
    }
}

/// Row from the `teams` table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub team_type: TeamType,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Row from the `team_members` table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: Uuid,
    pub team_id: Option<Uuid>,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub role: EmployeeRole,
    pub title: Option<String>,
    pub reports_to_id: Option<Uuid>,
    pub profile_image_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
