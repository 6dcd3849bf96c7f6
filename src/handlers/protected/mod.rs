// handlers/protected/mod.rs - Protected handlers (JWT authentication required)
//
// Middleware stack applied to every route in this tier:
//   jwt_auth_middleware        -> AuthUser extension
//   validate_tenant_middleware -> Tenant + TenantPool extensions
pub mod teams; // Team directory and organization chart

pub use teams::*;
