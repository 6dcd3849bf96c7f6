mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::Value;

const CHART_PATH: &str = "/api/teams/organization-chart";

#[tokio::test]
async fn organization_chart_requires_bearer_token() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}{}", server.base_url, CHART_PATH))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let body = res.json::<Value>().await?;
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "UNAUTHORIZED");
    assert!(body["error"].is_string(), "error message expected: {}", body);
    Ok(())
}

#[tokio::test]
async fn organization_chart_rejects_foreign_token() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}{}", server.base_url, CHART_PATH))
        .bearer_auth("not.a.jwt")
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn organization_chart_reports_unavailable_directory() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let token = common::bearer_token("tenant_integration")?;

    let res = client
        .get(format!("{}{}", server.base_url, CHART_PATH))
        .bearer_auth(token)
        .send()
        .await?;

    // Authenticated, but the tenant registry cannot be reached
    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = res.json::<Value>().await?;
    assert_eq!(body["success"], false);
    assert!(body.get("data").is_none(), "failure must not carry data: {}", body);
    Ok(())
}

#[tokio::test]
async fn team_routes_share_authentication() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    for path in ["/api/teams", "/api/teams/00000000-0000-0000-0000-000000000000/members"] {
        let res = client.get(format!("{}{}", server.base_url, path)).send().await?;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "{} should require auth", path);
    }
    Ok(())
}
