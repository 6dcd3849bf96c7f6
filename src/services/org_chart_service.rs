use std::time::Instant;

use crate::config::OrgChartConfig;
use crate::directory::{DirectoryError, DirectoryStore};
use crate::orgchart::{OrgTreeBuilder, OrganizationChartNode};

/// Loads the active directory and turns it into an organization chart.
/// Every call reads fresh data; nothing is cached between requests.
pub struct OrgChartService<S> {
    store: S,
    config: OrgChartConfig,
}

impl<S: DirectoryStore> OrgChartService<S> {
    pub fn new(store: S, config: OrgChartConfig) -> Self {
        Self { store, config }
    }

    pub async fn organization_chart(&self) -> Result<OrganizationChartNode, DirectoryError> {
        let started = Instant::now();
        let employees = self.store.active_employees().await?;
        let chart = OrgTreeBuilder::new(&employees, &self.config.default_root)
            .max_depth(self.config.max_depth)
            .build();

        tracing::info!(
            "Organization chart built: root='{}', employees={}, nodes={}, elapsed={:?}",
            chart.id,
            employees.len(),
            chart.node_count(),
            started.elapsed()
        );
        Ok(chart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::{EmployeeRole, TeamType};
    use crate::directory::MemoryDirectoryStore;
    use crate::testing::{ids, member, team, FailingDirectoryStore};

    #[tokio::test]
    async fn builds_chart_from_active_directory() {
        let leadership = team("Leadership", TeamType::Internal, true);
        let partners = team("Partners", TeamType::External, true);
        let ceo = member("Jane", "Doe", EmployeeRole::Ceo, Some(&leadership), None);
        let auditor = member("Ola", "Audit", EmployeeRole::Consultant, Some(&partners), Some(&ceo));
        let mut former = member("Fay", "Former", EmployeeRole::Manager, Some(&leadership), Some(&ceo));
        former.is_active = false;

        let store = MemoryDirectoryStore::new(
            vec![leadership, partners],
            vec![ceo.clone(), auditor.clone(), former],
        );
        let service = OrgChartService::new(store, OrgChartConfig::default());

        let chart = service.organization_chart().await.unwrap();

        assert_eq!(chart.id, ceo.id.to_string());
        assert_eq!(chart.team_name, "Leadership");
        let auditor_id = auditor.id.to_string();
        assert_eq!(ids(&chart.children), vec![auditor_id.as_str()]);
        assert_eq!(chart.children[0].team_type, TeamType::External);
        assert_eq!(chart.children[0].title, "Consultant");
    }

    #[tokio::test]
    async fn empty_directory_yields_default_root() {
        let service = OrgChartService::new(MemoryDirectoryStore::default(), OrgChartConfig::default());

        let chart = service.organization_chart().await.unwrap();

        assert_eq!(chart.id, "default-ceo");
        assert!(chart.children.is_empty());
    }

    #[tokio::test]
    async fn store_failure_propagates() {
        let service = OrgChartService::new(FailingDirectoryStore, OrgChartConfig::default());

        let err = service.organization_chart().await.unwrap_err();

        assert!(matches!(err, DirectoryError::Database(sqlx::Error::PoolTimedOut)));
    }
}
