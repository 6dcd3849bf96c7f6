use uuid::Uuid;

/// Active tenant row from the system database `tenants` table
#[derive(Debug, Clone)]
pub struct Tenant {
    pub id: Uuid,
    pub name: String,
    pub database: String,
    pub is_active: bool,
}
