use async_trait::async_trait;
use uuid::Uuid;

use crate::database::models::{Employee, Team, TeamMember};

use super::{employee_from_member, DirectoryError, DirectoryStore};

/// In-process directory, filtered the same way as the SQL store.
/// Members are returned in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryDirectoryStore {
    teams: Vec<Team>,
    members: Vec<TeamMember>,
}

impl MemoryDirectoryStore {
    pub fn new(teams: Vec<Team>, members: Vec<TeamMember>) -> Self {
        Self { teams, members }
    }

    fn team(&self, id: Uuid) -> Option<&Team> {
        self.teams.iter().find(|team| team.id == id)
    }
}

#[async_trait]
impl DirectoryStore for MemoryDirectoryStore {
    async fn active_employees(&self) -> Result<Vec<Employee>, DirectoryError> {
        let employees = self
            .members
            .iter()
            .filter(|member| member.is_active)
            .filter_map(|member| match member.team_id.map(|id| self.team(id)) {
                // Member whose team row is missing behaves like the SQL left join
                None | Some(None) => Some(employee_from_member(member, None)),
                Some(Some(team)) if team.is_active => Some(employee_from_member(member, Some(team))),
                Some(Some(_)) => None,
            })
            .collect();
        Ok(employees)
    }

    async fn list_teams(&self, include_inactive: bool) -> Result<Vec<Team>, DirectoryError> {
        let mut teams: Vec<Team> = self
            .teams
            .iter()
            .filter(|team| include_inactive || team.is_active)
            .cloned()
            .collect();
        teams.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(teams)
    }

    async fn team_members(&self, team_id: Uuid) -> Result<Vec<TeamMember>, DirectoryError> {
        if self.team(team_id).is_none() {
            return Err(DirectoryError::TeamNotFound(team_id));
        }
        Ok(self
            .members
            .iter()
            .filter(|member| member.team_id == Some(team_id) && member.is_active)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::{EmployeeRole, TeamType};
    use crate::testing::{member, team};

    #[tokio::test]
    async fn active_employees_skip_inactive_members_and_teams() {
        let engineering = team("Engineering", TeamType::Internal, true);
        let retired = team("Retired", TeamType::External, false);
        let ceo = member("Jane", "Doe", EmployeeRole::Ceo, Some(&engineering), None);
        let mut gone = member("Gus", "Gone", EmployeeRole::Developer, Some(&engineering), Some(&ceo));
        gone.is_active = false;
        let parked = member("Pat", "Park", EmployeeRole::Consultant, Some(&retired), Some(&ceo));
        let loose = member("Lou", "Loose", EmployeeRole::Contractor, None, Some(&ceo));

        let store = MemoryDirectoryStore::new(
            vec![engineering.clone(), retired],
            vec![ceo.clone(), gone, parked, loose.clone()],
        );

        let employees = store.active_employees().await.unwrap();

        let names: Vec<_> = employees.iter().map(Employee::full_name).collect();
        assert_eq!(names, vec!["Jane Doe", "Lou Loose"]);
        assert_eq!(employees[0].team_name.as_deref(), Some("Engineering"));
        assert_eq!(employees[1].team_name, None);
        assert_eq!(employees[1].reports_to_id, Some(ceo.id.to_string()));
    }

    #[tokio::test]
    async fn lists_teams_by_name() {
        let store = MemoryDirectoryStore::new(
            vec![
                team("QA", TeamType::Internal, true),
                team("Audit", TeamType::External, false),
                team("Design", TeamType::Internal, true),
            ],
            vec![],
        );

        let active: Vec<_> = store.list_teams(false).await.unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(active, vec!["Design", "QA"]);

        let all = store.list_teams(true).await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].name, "Audit");
    }

    #[tokio::test]
    async fn team_members_of_unknown_team_fail() {
        let store = MemoryDirectoryStore::default();
        let id = Uuid::new_v4();

        let err = store.team_members(id).await.unwrap_err();
        assert!(matches!(err, DirectoryError::TeamNotFound(missing) if missing == id));
    }
}
