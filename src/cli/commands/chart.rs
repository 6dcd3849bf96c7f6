use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Subcommand;
use serde_json::Value;

use crate::cli::utils::output_chart;
use crate::cli::OutputFormat;
use crate::config;
use crate::database::models::Employee;
use crate::orgchart::{OrgTreeBuilder, OrganizationChartNode};

#[derive(Subcommand)]
pub enum ChartCommands {
    #[command(about = "Build a chart offline from a JSON or YAML list of employees")]
    Build {
        #[arg(help = "Employee file (.json, .yaml or .yml)")]
        input: PathBuf,
        #[arg(long, help = "Keep employees marked inactive")]
        include_inactive: bool,
    },

    #[command(about = "Fetch the chart from a running server")]
    Fetch {
        #[arg(long, default_value = "http://localhost:3000", help = "Server base URL")]
        url: String,
        #[arg(long, help = "Bearer token (defaults to TEAM_DIRECTORY_TOKEN)")]
        token: Option<String>,
    },
}

pub async fn handle(cmd: ChartCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        ChartCommands::Build { input, include_inactive } => {
            let mut employees = load_employees(&input)?;
            if !include_inactive {
                employees.retain(|e| e.is_active);
            }
            tracing::debug!("Loaded {} employees from {}", employees.len(), input.display());

            let org_chart = &config::config().org_chart;
            let chart = OrgTreeBuilder::new(&employees, &org_chart.default_root)
                .max_depth(org_chart.max_depth)
                .build();
            output_chart(&output_format, &chart)
        }
        ChartCommands::Fetch { url, token } => {
            let token = match token.or_else(|| std::env::var("TEAM_DIRECTORY_TOKEN").ok()) {
                Some(token) => token,
                None => bail!("no token given; pass --token or set TEAM_DIRECTORY_TOKEN"),
            };
            let chart = fetch_chart(&url, &token).await?;
            output_chart(&output_format, &chart)
        }
    }
}

/// Parse an employee list, choosing the format from the file extension
pub fn load_employees(path: &Path) -> anyhow::Result<Vec<Employee>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let is_yaml = matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    );

    let employees = if is_yaml {
        serde_yaml::from_str(&raw).with_context(|| format!("invalid YAML in {}", path.display()))?
    } else {
        serde_json::from_str(&raw).with_context(|| format!("invalid JSON in {}", path.display()))?
    };
    Ok(employees)
}

async fn fetch_chart(base_url: &str, token: &str) -> anyhow::Result<OrganizationChartNode> {
    let endpoint = format!("{}/api/teams/organization-chart", base_url.trim_end_matches('/'));
    let response = reqwest::Client::new()
        .get(&endpoint)
        .bearer_auth(token)
        .send()
        .await
        .with_context(|| format!("request to {} failed", endpoint))?;

    let status = response.status();
    let body: Value = response.json().await.context("server returned a non-JSON body")?;

    if body["success"] != Value::Bool(true) {
        let error = body["error"].as_str().unwrap_or("unknown error");
        bail!("server responded {}: {}", status, error);
    }

    serde_json::from_value(body["data"].clone()).context("unexpected organization chart shape")
}
