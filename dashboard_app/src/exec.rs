//! Network side of the dashboard: owns the REST client and services panel
//! commands without ever blocking the interface.

use algobot::RestClient;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::app::event::{ApiCommand, NetEvent};
use crate::app::state::LiveAction;

/// One-shot startup work: probe the service, then load the account overview.
pub async fn bootstrap(client: RestClient, tx: mpsc::Sender<NetEvent>) {
    match client.status().await {
        Ok(probe) => {
            info!("backend reachable (status: {})", probe.status);
            let _ = tx.send(NetEvent::BackendProbe { ok: true }).await;
        }
        Err(err) => {
            warn!("backend status probe failed: {err}");
            let _ = tx.send(NetEvent::BackendProbe { ok: false }).await;
        }
    }

    let outcome = client.account().await;
    if let Err(err) = &outcome {
        warn!("account fetch failed: {err}");
    }
    let _ = tx.send(NetEvent::Account(outcome)).await;
}

/// Command loop. Each request runs in its own task, so a slow backtest never
/// delays a live-trade call issued after it.
pub async fn run(
    client: RestClient,
    mut rx: mpsc::Receiver<ApiCommand>,
    tx: mpsc::Sender<NetEvent>,
) {
    while let Some(cmd) = rx.recv().await {
        let client = client.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let event = handle(&client, cmd).await;
            let _ = tx.send(event).await;
        });
    }
}

async fn handle(client: &RestClient, cmd: ApiCommand) -> NetEvent {
    match cmd {
        ApiCommand::RunBacktest { symbol, seq } => {
            info!("running backtest for {symbol} (seq {seq})");
            let outcome = client.run_backtest(&symbol).await;
            if let Err(err) = &outcome {
                warn!("backtest for {symbol} failed: {err}");
            }
            NetEvent::BacktestDone { seq, outcome }
        }
        ApiCommand::LiveTrade {
            action,
            symbol,
            seq,
        } => {
            info!("live trade {action:?} for {symbol} (seq {seq})");
            let outcome = match action {
                LiveAction::Start => client.start_live_trade(&symbol).await,
                LiveAction::Stop => client.stop_live_trade(&symbol).await,
            }
            .map(|ack| ack.message);
            if let Err(err) = &outcome {
                warn!("live trade {action:?} for {symbol} failed: {err}");
            }
            NetEvent::LiveDone {
                action,
                seq,
                outcome,
            }
        }
    }
}
