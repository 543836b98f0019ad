//! heraldd — hosts the notification bridge over the TCP message channel.
//!
//! Serves the protocol against the in-memory center so application-side
//! clients can be developed and integration-tested without a device backing
//! the native subsystem.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use herald::center::NotificationCenter;
use herald::ipc::IpcServer;
use herald::testing::MemoryCenter;
use herald::{Config, NotificationBridge};

#[derive(Debug, Parser)]
#[command(name = "heraldd", about = "Local-notification bridge daemon")]
struct Args {
    /// Bind address for the message channel (overrides config)
    #[arg(long)]
    listen: Option<String>,

    /// Path to a JSON config file
    #[arg(long, env = "HERALD_CONFIG")]
    config: Option<PathBuf>,

    /// Decline authorization prompts instead of granting them
    #[arg(long)]
    deny: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    herald::observability::init_tracing();

    let listen = args
        .listen
        .unwrap_or_else(|| config.server.listen_addr.clone());
    let addr: SocketAddr = listen.parse()?;

    let center: Arc<dyn NotificationCenter> = if args.deny {
        Arc::new(MemoryCenter::denying())
    } else {
        Arc::new(MemoryCenter::granting())
    };
    let bridge = NotificationBridge::new(center);
    let server = IpcServer::new(bridge, addr, config.ipc.clone());

    tokio::select! {
        result = server.serve() => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
            server.shutdown();
        }
    }

    Ok(())
}
