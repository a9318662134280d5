//! Elixir Chess server.
//!
//! Run with: `cargo run --package elixir-chess -- --listen-addr 127.0.0.1:5000`

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use elixir_chess::ServerConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "elixir-chess")]
#[command(about = "Real-time chess where moves cost regenerating elixir")]
struct Args {
    /// HTTP and WebSocket listen address.
    #[arg(long, env = "LISTEN_ADDR", default_value = "0.0.0.0:5000")]
    listen_addr: String,

    /// Milliseconds between elixir regeneration ticks.
    #[arg(long, env = "REGEN_INTERVAL_MS", default_value_t = 1500)]
    regen_interval_ms: u64,

    /// Snapshots buffered per client before it skips ahead.
    #[arg(long, env = "BROADCAST_CAPACITY", default_value_t = 64)]
    broadcast_capacity: usize,
}

impl From<Args> for ServerConfig {
    fn from(args: Args) -> Self {
        Self {
            listen_addr: args.listen_addr,
            regen_interval: Duration::from_millis(args.regen_interval_ms),
            broadcast_capacity: args.broadcast_capacity,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("elixir_chess=info".parse()?))
        .init();

    let config = ServerConfig::from(Args::parse());
    tracing::info!(?config, "Elixir Chess starting...");

    elixir_chess::server::run(config, async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
        }
    })
    .await?;

    tracing::info!("Elixir Chess shutdown");
    Ok(())
}
