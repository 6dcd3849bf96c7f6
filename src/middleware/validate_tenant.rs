use axum::{extract::Request, middleware::Next, response::Response};
use sqlx::{PgPool, Row};

use crate::database::models::Tenant;
use crate::database::DatabaseManager;
use crate::error::ApiError;

use super::auth::AuthUser;

/// Tenant database pool, injected by middleware
#[derive(Clone)]
pub struct TenantPool(pub PgPool);

/// Middleware that checks the tenant from the JWT against the system `tenants`
/// table and injects the tenant's pool. Requires `jwt_auth_middleware` first.
pub async fn validate_tenant_middleware(
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_user = request
        .extensions()
        .get::<AuthUser>()
        .cloned()
        .ok_or_else(|| ApiError::unauthorized("JWT authentication required before tenant validation"))?;

    let main_pool = DatabaseManager::main_pool().await?;

    let row = sqlx::query(
        r#"
        SELECT id, name, database, is_active
        FROM tenants
        WHERE database = $1
        AND is_active = true
        AND trashed_at IS NULL
        AND deleted_at IS NULL
        "#,
    )
    .bind(&auth_user.database)
    .fetch_optional(&main_pool)
    .await
    .map_err(|e| {
        tracing::error!("Database error validating tenant: {}", e);
        ApiError::internal_server_error("Failed to validate tenant")
    })?;

    let row = row.ok_or_else(|| {
        tracing::warn!("Tenant validation failed: '{}' not found or inactive", auth_user.database);
        ApiError::forbidden(format!("Tenant '{}' is not active or does not exist", auth_user.tenant))
    })?;

    let tenant = Tenant {
        id: row.try_get("id").map_err(malformed_tenant_row)?,
        name: row.try_get("name").map_err(malformed_tenant_row)?,
        database: auth_user.database.clone(),
        is_active: row.try_get("is_active").map_err(malformed_tenant_row)?,
    };

    let tenant_pool = DatabaseManager::tenant_pool(&tenant.database).await.map_err(|e| {
        tracing::error!("Failed to get database pool for tenant '{}': {}", tenant.database, e);
        ApiError::from(e)
    })?;

    tracing::debug!("Tenant validated: {} ({})", tenant.name, tenant.database);

    request.extensions_mut().insert(tenant);
    request.extensions_mut().insert(TenantPool(tenant_pool));

    Ok(next.run(request).await)
}

fn malformed_tenant_row(e: sqlx::Error) -> ApiError {
    tracing::error!("Malformed tenant row: {}", e);
    ApiError::internal_server_error("Failed to validate tenant")
}
