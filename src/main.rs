//! # Estate Dashboard Main Entry Point
//!
//! This is the main entry point for the estate-dashboard service.

use estate_dashboard::{config::ConfigLoader, server::run_server, telemetry};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration from layered env files and variables
    let config_loader = ConfigLoader::new();
    let config = config_loader.load()?;

    telemetry::init_tracing(&config)?;

    tracing::info!(profile = %config.profile, "Loaded configuration");
    if let Ok(config_json) = config.pretty_json() {
        tracing::debug!(config = %config_json, "Effective configuration");
    }

    // Start the server with the loaded configuration
    run_server(config).await
}
