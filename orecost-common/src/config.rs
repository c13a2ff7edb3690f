//! Service configuration
//!
//! All settings come from command-line flags or environment variables,
//! with compiled defaults as the fallback. No config file is consulted.

use clap::Parser;
use std::path::PathBuf;

/// OreCost API configuration
#[derive(Parser, Debug, Clone)]
#[command(name = "orecost-api", version, about = "Hero equipment ore cost API")]
pub struct Config {
    /// Address the HTTP server binds to
    #[arg(long, env = "SERVER_ADDR", default_value = "127.0.0.1:8080")]
    pub server_addr: String,

    /// Base URL of the upstream Clash of Clans API
    #[arg(long, env = "COC_API_BASE", default_value = "https://api.clashofclans.com/v1")]
    pub api_base: String,

    /// Bearer token for the upstream API
    #[arg(long, env = "COC_API_TOKEN", default_value = "", hide_env_values = true)]
    pub api_token: String,

    /// Path to the equipment catalog JSON file
    #[arg(long, env = "EQUIPMENT_CATALOG_PATH", default_value = "data/hero_equipment.json")]
    pub catalog_path: PathBuf,

    /// Externally reachable base URL, used in served API docs
    #[arg(long, env = "APP_PUBLIC_URL")]
    pub public_url: Option<String>,
}

impl Config {
    /// Parse configuration from CLI arguments and environment.
    ///
    /// Logs a warning when the upstream token is missing; the service
    /// still starts, but upstream calls will be rejected.
    pub fn load() -> Self {
        let config = Self::parse();
        if config.api_token.is_empty() {
            tracing::warn!("COC_API_TOKEN is not set; upstream calls will fail");
        }
        config
    }
}
