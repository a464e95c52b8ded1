//! wallet-ledger service entry point
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌─────────────┐    ┌──────────┐
//! │  Config  │───▶│ Postgres │───▶│ Coordinator │───▶│ Gateway  │
//! │  (YAML)  │    │ (sqlx)   │    │ (transfers) │    │ (axum)   │
//! └──────────┘    └──────────┘    └─────────────┘    └──────────┘
//! ```

use std::sync::Arc;

use wallet_ledger::auth::AuthService;
use wallet_ledger::config::AppConfig;
use wallet_ledger::db::Database;
use wallet_ledger::{gateway, logging};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let mut config = AppConfig::load(&env);
    config.apply_env_overrides();
    if let Some(port) = get_port_override() {
        config.gateway.port = port;
    }

    let _log_guard = logging::init_logging(&config);
    tracing::info!(
        "Starting wallet-ledger v{} in {} mode",
        env!("CARGO_PKG_VERSION"),
        env
    );

    let db = Arc::new(
        Database::connect(&config.database.url, config.database.max_connections).await?,
    );
    db.migrate().await?;

    let auth = Arc::new(AuthService::new(
        db.pool().clone(),
        config.auth.jwt_secret.clone(),
        config.auth.token_ttl_hours,
    ));

    gateway::run_server(&config.gateway.host, config.gateway.port, db, auth).await
}
