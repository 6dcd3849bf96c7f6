//! Organization chart construction from the flat reports-to relation.

pub mod builder;
pub mod node;

pub use builder::{build_organization_chart, OrgTreeBuilder, DEFAULT_MAX_DEPTH};
pub use node::{Nodes, OrganizationChartNode};
