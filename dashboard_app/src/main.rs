// dashboard_app/src/main.rs
//
// AlgoBot dashboard: account overview plus backtest and live paper-trading
// controls against the trading backend.
//
// Run:
//   export ALGOBOT_API_URL='http://127.0.0.1:8000'
//   cargo run -p dashboard_app

mod app;
mod exec;

use anyhow::{Context, Result};
use tokio::sync::mpsc;
use tracing::info;

use algobot::{ClientConfig, RestClient};
use app::DashboardApp;

// ---- rustls crypto provider ----
fn init_crypto_provider() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    init_crypto_provider();

    let config = ClientConfig::from_env();
    info!("using backend at {}", config.base_url);
    let client = RestClient::new(config);

    // panels -> exec commands, exec -> panels settlements
    let (cmd_tx, cmd_rx) = mpsc::channel(32);
    let (event_tx, event_rx) = mpsc::channel(64);

    // Tokio runtime that lives alongside the GUI
    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("build tokio runtime")?;

    rt.spawn(exec::bootstrap(client.clone(), event_tx.clone()));
    rt.spawn(exec::run(client, cmd_rx, event_tx));

    let options = eframe::NativeOptions::default();
    if let Err(e) = eframe::run_native(
        "AlgoBot Dashboard",
        options,
        Box::new(|_cc| Box::new(DashboardApp::new(cmd_tx, event_rx))),
    ) {
        eprintln!("eframe error: {e}");
    }

    drop(rt);
    Ok(())
}
