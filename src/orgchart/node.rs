use serde::{Deserialize, Serialize};

use crate::config::DefaultRootConfig;
use crate::database::models::{Employee, EmployeeRole, TeamType};

pub const UNASSIGNED_TEAM: &str = "Unassigned";

/// One person in the rendered organization chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationChartNode {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: Option<String>,
    pub role: EmployeeRole,
    pub title: String,
    pub team_name: String,
    pub team_type: TeamType,
    pub profile_image_url: Option<String>,
    pub reports_to_id: Option<String>,
    /// Depth below the root (root is 0)
    pub level: u32,
    pub children: Vec<OrganizationChartNode>,
    /// Set when this node closes a reports-to cycle; its subtree is not expanded again
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub cycle_truncated: bool,
    /// Set when this node sits at the depth limit and its reports were left out
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub depth_truncated: bool,
}

impl OrganizationChartNode {
    pub fn from_employee(employee: &Employee, level: u32) -> Self {
        Self {
            id: employee.id.clone(),
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            full_name: employee.full_name(),
            email: employee.email.clone(),
            role: employee.role.clone(),
            title: employee.display_title(),
            team_name: employee
                .team_name
                .clone()
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| UNASSIGNED_TEAM.to_string()),
            team_type: employee.team_type.unwrap_or_default(),
            profile_image_url: employee.profile_image_url.clone(),
            reports_to_id: employee.reports_to_id.clone(),
            level,
            children: Vec::new(),
            cycle_truncated: false,
            depth_truncated: false,
        }
    }

    /// Stand-in root used when nobody in the directory holds the top role
    pub fn synthesized(root: &DefaultRootConfig) -> Self {
        Self {
            id: root.id.clone(),
            first_name: root.first_name.clone(),
            last_name: root.last_name.clone(),
            full_name: format!("{} {}", root.first_name, root.last_name),
            email: None,
            role: EmployeeRole::TOP,
            title: root.title.clone(),
            team_name: root.team_name.clone(),
            team_type: root.team_type,
            profile_image_url: None,
            reports_to_id: None,
            level: 0,
            children: Vec::new(),
            cycle_truncated: false,
            depth_truncated: false,
        }
    }

    /// Number of nodes in this subtree, including truncated leaves
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// First node with the given id, in depth-first order
    pub fn find(&self, id: &str) -> Option<&OrganizationChartNode> {
        self.iter().find(|node| node.id == id)
    }

    /// Depth-first, pre-order walk over this subtree
    pub fn iter(&self) -> Nodes<'_> {
        Nodes { stack: vec![self] }
    }
}

/// Pre-order iterator over a chart, driven by an explicit stack
pub struct Nodes<'a> {
    stack: Vec<&'a OrganizationChartNode>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a OrganizationChartNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
