// handlers/protected/teams/members.rs - GET /api/teams/:id/members

use axum::extract::{Extension, Path};
use uuid::Uuid;

use crate::database::models::TeamMember;
use crate::directory::{DirectoryStore, PgDirectoryStore};
use crate::middleware::{ApiResponse, ApiResult, TenantPool};

pub async fn team_members_get(
    Extension(TenantPool(pool)): Extension<TenantPool>,
    Path(team_id): Path<Uuid>,
) -> ApiResult<Vec<TeamMember>> {
    let members = PgDirectoryStore::new(pool).team_members(team_id).await?;
    Ok(ApiResponse::success(members))
}
