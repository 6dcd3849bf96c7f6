// handlers/protected/teams/mod.rs - Team directory handlers

pub mod list;               // GET /api/teams
pub mod members;            // GET /api/teams/:id/members
pub mod organization_chart; // GET /api/teams/organization-chart

pub use list::teams_list;
pub use members::team_members_get;
pub use organization_chart::organization_chart_get;
