use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

use crate::database::models::TeamType;
use crate::orgchart::DEFAULT_MAX_DEPTH;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub database: DatabaseConfig,
    pub api: ApiConfig,
    pub security: SecurityConfig,
    pub org_chart: OrgChartConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub system_database: String,
    pub max_connections: u32,
    pub connection_timeout: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub enable_cors: bool,
    pub cors_origins: Vec<String>,
    pub jwt_secret: String,
    pub jwt_expiry_hours: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrgChartConfig {
    pub default_root: DefaultRootConfig,
    /// Deepest level rendered; deeper reports are cut off below a truncated leaf
    pub max_depth: u32,
}

impl Default for OrgChartConfig {
    fn default() -> Self {
        Self {
            default_root: DefaultRootConfig::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Identity used for the synthesized root when no chief executive is on record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultRootConfig {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub team_name: String,
    pub team_type: TeamType,
}

impl Default for DefaultRootConfig {
    fn default() -> Self {
        Self {
            id: "default-ceo".to_string(),
            first_name: "Chief".to_string(),
            last_name: "Executive".to_string(),
            title: "Chief Executive Officer".to_string(),
            team_name: "Executive".to_string(),
            team_type: TeamType::Internal,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        // Database overrides
        if let Ok(v) = env::var("DATABASE_SYSTEM_NAME") {
            self.database.system_database = v;
        }
        if let Ok(v) = env::var("DATABASE_MAX_CONNECTIONS") {
            self.database.max_connections = v.parse().unwrap_or(self.database.max_connections);
        }
        if let Ok(v) = env::var("DATABASE_CONNECTION_TIMEOUT") {
            self.database.connection_timeout = v.parse().unwrap_or(self.database.connection_timeout);
        }

        // API overrides (TEAM_DIRECTORY_PORT wins over the generic PORT)
        if let Some(port) = env::var("TEAM_DIRECTORY_PORT")
            .ok()
            .or_else(|| env::var("PORT").ok())
            .and_then(|s| s.parse::<u16>().ok())
        {
            self.api.port = port;
        }

        // Security overrides
        if let Ok(v) = env::var("SECURITY_ENABLE_CORS") {
            self.security.enable_cors = v.parse().unwrap_or(self.security.enable_cors);
        }
        if let Ok(v) = env::var("SECURITY_CORS_ORIGINS") {
            self.security.cors_origins = v.split(',').map(|s| s.trim().to_string()).collect();
        }
        if let Ok(v) = env::var("JWT_SECRET") {
            self.security.jwt_secret = v;
        }
        if let Ok(v) = env::var("SECURITY_JWT_EXPIRY_HOURS") {
            self.security.jwt_expiry_hours = v.parse().unwrap_or(self.security.jwt_expiry_hours);
        }

        // Organization chart
        if let Ok(v) = env::var("ORG_CHART_MAX_DEPTH") {
            self.org_chart.max_depth = v.parse().unwrap_or(self.org_chart.max_depth);
        }
        let root = &mut self.org_chart.default_root;
        if let Ok(v) = env::var("ORG_CHART_DEFAULT_ROOT_ID") {
            root.id = v;
        }
        if let Ok(v) = env::var("ORG_CHART_DEFAULT_ROOT_FIRST_NAME") {
            root.first_name = v;
        }
        if let Ok(v) = env::var("ORG_CHART_DEFAULT_ROOT_LAST_NAME") {
            root.last_name = v;
        }
        if let Ok(v) = env::var("ORG_CHART_DEFAULT_ROOT_TITLE") {
            root.title = v;
        }
        if let Ok(v) = env::var("ORG_CHART_DEFAULT_ROOT_TEAM") {
            root.team_name = v;
        }
        if let Ok(v) = env::var("ORG_CHART_DEFAULT_ROOT_TEAM_TYPE") {
            root.team_type = TeamType::from(v);
        }

        self
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            database: DatabaseConfig {
                system_database: "directory_main".to_string(),
                max_connections: 10,
                connection_timeout: 30,
            },
            api: ApiConfig {
                port: 3000,
            },
            security: SecurityConfig {
                enable_cors: true,
                cors_origins: vec!["http://localhost:3000".to_string(), "http://localhost:5173".to_string()],
                jwt_secret: "development-secret".to_string(),
                jwt_expiry_hours: 24 * 7, // 1 week
            },
            org_chart: OrgChartConfig::default(),
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            database: DatabaseConfig {
                system_database: "directory_main".to_string(),
                max_connections: 20,
                connection_timeout: 10,
            },
            api: ApiConfig {
                port: 3000,
            },
            security: SecurityConfig {
                enable_cors: true,
                cors_origins: vec!["https://staging.example.com".to_string()],
                jwt_secret: String::new(),
                jwt_expiry_hours: 24,
            },
            org_chart: OrgChartConfig::default(),
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            database: DatabaseConfig {
                system_database: "directory_main".to_string(),
                max_connections: 50,
                connection_timeout: 5,
            },
            api: ApiConfig {
                port: 3000,
            },
            security: SecurityConfig {
                enable_cors: true,
                cors_origins: vec!["https://app.example.com".to_string()],
                // Must come from JWT_SECRET; an empty secret rejects every token
                jwt_secret: String::new(),
                jwt_expiry_hours: 4,
            },
            org_chart: OrgChartConfig::default(),
        }
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[macro_export]
macro_rules! is_development {
    () => {
        matches!($crate::config::CONFIG.environment, $crate::config::Environment::Development)
    };
}
