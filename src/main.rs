//! parleyd - Parley chat daemon.

use parleyd::config::Config;
use parleyd::hub;
use parleyd::network::Gateway;
use parleyd::switchboard::{Settings, Switchboard};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());

    let config = Config::load(&config_path).map_err(|e| {
        error!(path = %config_path, error = %e, "Failed to load config");
        e
    })?;

    info!(
        name = %config.server.name,
        listen = %config.server.listen,
        idle_secs = config.timeouts.idle_secs,
        "Starting parleyd"
    );

    let (switchboard, hub_rx) =
        Switchboard::new(Settings::from_config(&config), config.limits.hub_capacity);
    let switchboard = Arc::new(switchboard);

    // The hub is the single serialized consumer of broadcast intents.
    tokio::spawn(hub::run(Arc::clone(&switchboard.roster), hub_rx));

    let gateway = Gateway::bind(config.server.listen, Arc::clone(&switchboard)).await?;
    gateway.run().await
}
