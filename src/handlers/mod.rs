// handlers/mod.rs - route handlers grouped by security tier
//
// Public handlers (/, /health) live next to the router in main.rs.
// Everything under /api/* is protected: JWT + active tenant required.
pub mod protected;

pub use protected::*;
