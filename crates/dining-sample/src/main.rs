//! Runs a default table until Ctrl-C, then stops it cooperatively.

use std::sync::Arc;

use dining_core::{setup_tracing, Table, TableConfig, TableError};
use dining_sample::ConsoleSink;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), TableError> {
    setup_tracing();

    let config = TableConfig::default();
    info!(
        agents = config.agents,
        think_ms = ?config.think_ms,
        eat_ms = ?config.eat_ms,
        "Starting dining table"
    );

    let table = Table::start(config, Arc::new(ConsoleSink::new()))?;

    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!(%error, "Signal listener failed; stopping");
    }

    // Agents finish their in-flight cycle before exiting, so the stop can
    // take up to one think+eat round.
    info!("Stop requested; waiting for agents to finish their cycle");
    table.shutdown().await?;

    info!("All agents stopped");
    Ok(())
}
