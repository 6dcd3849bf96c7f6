use serde::{Deserialize, Serialize};

use super::team::TeamType;

/// Job role of a team member. Unknown values survive as `Other` so a role
/// added to the database does not break the directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EmployeeRole {
    Ceo,
    Manager,
    TeamLead,
    SeniorDeveloper,
    Developer,
    JuniorDeveloper,
    Designer,
    QaEngineer,
    ProjectManager,
    BusinessAnalyst,
    Consultant,
    Contractor,
    Other(String),
}

impl EmployeeRole {
    /// The role that designates the root of the organization chart
    pub const TOP: EmployeeRole = EmployeeRole::Ceo;

    pub fn as_str(&self) -> &str {
        match self {
            EmployeeRole::Ceo => "ceo",
            EmployeeRole::Manager => "manager",
            EmployeeRole::TeamLead => "team_lead",
            EmployeeRole::SeniorDeveloper => "senior_developer",
            EmployeeRole::Developer => "developer",
            EmployeeRole::JuniorDeveloper => "junior_developer",
            EmployeeRole::Designer => "designer",
            EmployeeRole::QaEngineer => "qa_engineer",
            EmployeeRole::ProjectManager => "project_manager",
            EmployeeRole::BusinessAnalyst => "business_analyst",
            EmployeeRole::Consultant => "consultant",
            EmployeeRole::Contractor => "contractor",
            EmployeeRole::Other(role) => role,
        }
    }

    pub fn label(&self) -> String {
        role_label(self)
    }
}

impl From<String> for EmployeeRole {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ceo" => EmployeeRole::Ceo,
            "manager" => EmployeeRole::Manager,
            "team_lead" => EmployeeRole::TeamLead,
            "senior_developer" => EmployeeRole::SeniorDeveloper,
            "developer" => EmployeeRole::Developer,
            "junior_developer" => EmployeeRole::JuniorDeveloper,
            "designer" => EmployeeRole::Designer,
            "qa_engineer" => EmployeeRole::QaEngineer,
            "project_manager" => EmployeeRole::ProjectManager,
            "business_analyst" => EmployeeRole::BusinessAnalyst,
            "consultant" => EmployeeRole::Consultant,
            "contractor" => EmployeeRole::Contractor,
            _ => EmployeeRole::Other(value),
        }
    }
}

impl From<&str> for EmployeeRole {
    fn from(value: &str) -> Self {
        EmployeeRole::from(value.to_string())
    }
}

impl From<EmployeeRole> for String {
    fn from(role: EmployeeRole) -> Self {
        match role {
            EmployeeRole::Other(role) => role,
            known => known.as_str().to_string(),
        }
    }
}

/// Human-readable title for a role
pub fn role_label(role: &EmployeeRole) -> String {
    let label = match role {
        EmployeeRole::Ceo => "Chief Executive Officer",
        EmployeeRole::Manager => "Manager",
        EmployeeRole::TeamLead => "Team Lead",
        EmployeeRole::SeniorDeveloper => "Senior Developer",
        EmployeeRole::Developer => "Developer",
        EmployeeRole::JuniorDeveloper => "Junior Developer",
        EmployeeRole::Designer => "Designer",
        EmployeeRole::QaEngineer => "QA Engineer",
        EmployeeRole::ProjectManager => "Project Manager",
        EmployeeRole::BusinessAnalyst => "Business Analyst",
        EmployeeRole::Consultant => "Consultant",
        EmployeeRole::Contractor => "Contractor",
        EmployeeRole::Other(raw) => return title_case(&raw.replace('_', " ")),
    };
    label.to_string()
}

/// Uppercase the first character of every word, leaving the rest untouched
fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut at_word_start = true;
    for c in value.chars() {
        let is_word = c.is_alphanumeric();
        if is_word && at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = !is_word;
    }
    out
}

/// Active employee as read from the directory, joined with its team.
/// This is the only input the organization chart builder consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub role: EmployeeRole,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub reports_to_id: Option<String>,
    #[serde(default)]
    pub team_name: Option<String>,
    #[serde(default)]
    pub team_type: Option<TeamType>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Own title when present and non-empty, otherwise the role label
    pub fn display_title(&self) -> String {
        match self.title.as_deref().map(str::trim) {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => self.role.label(),
        }
    }
}
