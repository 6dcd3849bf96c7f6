use clap::Subcommand;
use serde_json::json;
use uuid::Uuid;

use crate::auth::{generate_jwt, Claims};
use crate::cli::utils::output_success;
use crate::cli::OutputFormat;
use crate::config;

#[derive(Subcommand)]
pub enum TokenCommands {
    #[command(about = "Sign a token with the configured JWT secret")]
    Issue {
        #[arg(help = "Tenant name")]
        tenant: String,
        #[arg(help = "Tenant database (tenant_<suffix>)")]
        database: String,
        #[arg(long, default_value = "admin", help = "User name")]
        user: String,
        #[arg(long, default_value = "full", help = "Access level")]
        access: String,
        #[arg(long, help = "Lifetime in hours (defaults to SECURITY_JWT_EXPIRY_HOURS)")]
        hours: Option<u64>,
    },
}

pub async fn handle(cmd: TokenCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        TokenCommands::Issue { tenant, database, user, access, hours } => {
            let security = &config::config().security;
            let claims = Claims::with_expiry(
                tenant,
                user,
                database,
                access,
                Uuid::new_v4(),
                hours.unwrap_or(security.jwt_expiry_hours),
            );
            let token = generate_jwt(&claims, &security.jwt_secret)?;

            match output_format {
                OutputFormat::Text => println!("{}", token),
                OutputFormat::Json => output_success(
                    &output_format,
                    "Token issued",
                    Some(json!({ "token": token, "expires_at": claims.exp })),
                )?,
            }
            Ok(())
        }
    }
}
