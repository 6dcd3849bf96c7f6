// handlers/protected/teams/organization_chart.rs - GET /api/teams/organization-chart

use axum::extract::Extension;

use crate::config::{self, OrgChartConfig};
use crate::database::models::Tenant;
use crate::directory::{DirectoryStore, PgDirectoryStore};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, TenantPool};
use crate::orgchart::OrganizationChartNode;
use crate::services::OrgChartService;

/// Hierarchy of all active employees on active teams, rooted at the chief
/// executive (or the configured stand-in).
pub async fn organization_chart_get(
    Extension(tenant): Extension<Tenant>,
    Extension(TenantPool(pool)): Extension<TenantPool>,
) -> ApiResult<OrganizationChartNode> {
    organization_chart_for(&tenant, PgDirectoryStore::new(pool), config::config().org_chart.clone()).await
}

/// Chart for one tenant's directory. Store failures surface as a generic 500
/// so connection details never reach the client.
pub async fn organization_chart_for<S: DirectoryStore>(
    tenant: &Tenant,
    store: S,
    org_chart: OrgChartConfig,
) -> ApiResult<OrganizationChartNode> {
    let service = OrgChartService::new(store, org_chart);

    let chart = service.organization_chart().await.map_err(|e| {
        tracing::error!("Error fetching organization chart for tenant '{}': {}", tenant.name, e);
        ApiError::internal_server_error("Failed to fetch organization chart")
    })?;

    tracing::debug!("Organization chart served for tenant '{}' ({})", tenant.name, tenant.database);
    Ok(ApiResponse::success(chart))
}
