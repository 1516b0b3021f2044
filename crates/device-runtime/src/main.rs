//! # Remote-IO Device Runtime
//!
//! Entry point for a remote-io device host.
//!
//! ## Startup Sequence
//!
//! 1. Initialize logging
//! 2. Load configuration from environment
//! 3. Open the flash-backed file store under the data directory
//! 4. Initialize the identity and network documents (load or default)
//! 5. Construct the file-access bridge for the external transfer service
//! 6. Bind the broadcast socket and spawn the announcer
//! 7. Signal ready, then park until Ctrl+C
//!
//! ## Wiring
//!
//! ```text
//!                  ┌── ConfigStoreService ──┐
//!  SharedFileStore ┤                        ├── one mutex, one store
//!                  └── FileAccessBridge ────┘
//!
//!  ConfigStoreService ──serial──> Announcer ──UDP──> 255.255.255.255:52018
//! ```

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use rio_announce::{identity_frame, AnnounceConfig, Announcer, UdpBroadcastSocket, ANNOUNCE_PORT};
use rio_config_store::{
    ConfigStoreService, DiskFileStore, FileAccessBridge, LoadOutcome, SharedFileStore, StoreConfig,
};

/// Runtime configuration, loaded from the environment.
struct RuntimeConfig {
    /// Directory holding the configuration documents.
    data_dir: PathBuf,
    /// UDP port announcements are broadcast to.
    announce_port: u16,
    /// Seconds between announcements.
    announce_interval: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            announce_port: ANNOUNCE_PORT,
            announce_interval: AnnounceConfig::default().send_interval,
        }
    }
}

/// Load configuration from environment variables.
fn load_config() -> RuntimeConfig {
    let mut config = RuntimeConfig::default();

    if let Ok(dir) = std::env::var("RIO_DATA_DIR") {
        config.data_dir = PathBuf::from(dir);
    }
    if let Ok(port) = std::env::var("RIO_ANNOUNCE_PORT") {
        if let Ok(p) = port.parse() {
            config.announce_port = p;
        }
    }
    if let Ok(secs) = std::env::var("RIO_ANNOUNCE_INTERVAL_SECS") {
        if let Ok(s) = secs.parse() {
            config.announce_interval = Duration::from_secs(s);
        }
    }

    config
}

fn outcome_label(outcome: LoadOutcome) -> &'static str {
    match outcome {
        LoadOutcome::Loaded => "loaded from store",
        LoadOutcome::DefaultedAndPersisted => "defaults persisted",
        LoadOutcome::KeptDefaults => "kept defaults (document unreadable)",
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = load_config();

    info!("===========================================");
    info!("  Remote-IO Device Runtime v0.1.0");
    info!("===========================================");
    info!("Data Dir: {:?}", config.data_dir);

    let store = DiskFileStore::new(&config.data_dir)
        .with_context(|| format!("failed to open data directory {:?}", config.data_dir))?;
    let files = SharedFileStore::new(store);

    let mut config_store = ConfigStoreService::new(files.clone(), StoreConfig::default());
    let identity_outcome = config_store
        .init_identity()
        .await
        .context("identity document initialization failed")?;
    let network_outcome = config_store
        .init_network()
        .await
        .context("network document initialization failed")?;

    info!("Identity document: {}", outcome_label(identity_outcome));
    info!("Network document: {}", outcome_label(network_outcome));
    info!("Serial: {}", config_store.serial_number());
    info!(
        "Network: static_ip={}, ip={}, mac={}",
        config_store.network_config().static_ip_enabled,
        config_store.network_config().ip_display(),
        config_store.network_config().mac_display()
    );

    // The transfer front-end (TFTP or similar) attaches here, driving the
    // bridge from its own threads. Transfers and config operations then
    // serialize on the shared store mutex.
    let _transfer_bridge = FileAccessBridge::new(files.clone());
    info!("File-access bridge ready");

    let (ready_tx, ready_rx) = tokio::sync::watch::channel(false);
    let socket = UdpBroadcastSocket::bind(config.announce_port)
        .context("failed to bind announcement socket")?;
    let announcer = Announcer::new(
        socket,
        identity_frame(config_store.serial_number()),
        ready_rx,
        AnnounceConfig::default().with_send_interval(config.announce_interval),
    );
    tokio::spawn(announcer.run());

    // Startup complete: release the announcer.
    ready_tx
        .send(true)
        .context("announcer exited before startup completed")?;

    info!("Device is running. Press Ctrl+C to stop.");
    tokio::signal::ctrl_c().await?;

    info!("Shutdown complete");
    Ok(())
}
