// handlers/protected/teams/list.rs - GET /api/teams

use axum::extract::{Extension, Query};
use serde::Deserialize;

use crate::database::models::Team;
use crate::directory::{DirectoryStore, PgDirectoryStore};
use crate::middleware::{ApiResponse, ApiResult, TenantPool};

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub include_inactive: Option<bool>,
}

pub async fn teams_list(
    Extension(TenantPool(pool)): Extension<TenantPool>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Vec<Team>> {
    let store = PgDirectoryStore::new(pool);
    let teams = store.list_teams(query.include_inactive.unwrap_or(false)).await?;
    Ok(ApiResponse::success(teams))
}
