use std::process::{Child, Command, Stdio};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;

use team_directory_api::auth::{generate_jwt, Claims};

static SERVER: OnceLock<TestServer> = OnceLock::new();

pub const JWT_SECRET: &str = "integration-test-secret";

#[allow(dead_code)]
pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    child: Child,
}

impl TestServer {
    fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        // No DATABASE_URL: every database-backed path fails fast and deterministically
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_team-directory-api"));
        cmd.env("TEAM_DIRECTORY_PORT", port.to_string())
            .env("JWT_SECRET", JWT_SECRET)
            .env("DATABASE_CONNECTION_TIMEOUT", "2")
            .env_remove("DATABASE_URL")
            .env_remove("APP_ENV")
            .env_remove("PORT")
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self { port, base_url, child })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status() == StatusCode::OK || resp.status() == StatusCode::SERVICE_UNAVAILABLE {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }
}

pub async fn ensure_server() -> Result<&'static TestServer> {
    let server = SERVER.get_or_init(|| TestServer::spawn().expect("failed to spawn server binary"));
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}

/// Token accepted by the spawned server
#[allow(dead_code)]
pub fn bearer_token(database: &str) -> Result<String> {
    let claims = Claims::with_expiry(
        "integration".to_string(),
        "tester".to_string(),
        database.to_string(),
        "full".to_string(),
        uuid::Uuid::new_v4(),
        1,
    );
    Ok(generate_jwt(&claims, JWT_SECRET)?)
}
