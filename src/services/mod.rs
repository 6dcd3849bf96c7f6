pub mod org_chart_service;

pub use org_chart_service::OrgChartService;
