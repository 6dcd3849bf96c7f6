pub mod employee;
pub mod team;
pub mod tenant;

pub use employee::{role_label, Employee, EmployeeRole};
pub use team::{Team, TeamMember, TeamType};
pub use tenant::Tenant;
