use log::debug;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::ClientConfig;
use crate::error::Error;
use crate::types::{Account, ApiErrorBody, BacktestReport, LiveTradeAck, ServiceStatus};

/// Asynchronous HTTP client for the trading service.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct RestClient {
    http: Client,
    base_url: String,
}

/// The account endpoint reports its own failures with HTTP 200 and an
/// `{"error": ...}` body, so the two shapes are told apart here.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AccountEnvelope {
    Snapshot(Account),
    Failure { error: String },
}

impl RestClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: Client::new(),
            base_url: config.base_url,
        }
    }

    /// Service health probe.
    pub async fn status(&self) -> Result<ServiceStatus, Error> {
        let url = format!("{}/status", self.base_url);
        debug!("GET {url}");
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        interpret_response(status, &body)
    }

    /// One-shot account overview.
    pub async fn account(&self) -> Result<Account, Error> {
        let url = format!("{}/api/account", self.base_url);
        debug!("GET {url}");
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        match interpret_response(status, &body)? {
            AccountEnvelope::Snapshot(account) => Ok(account),
            AccountEnvelope::Failure { error } => Err(Error::Api {
                status: status.as_u16(),
                detail: Some(error),
            }),
        }
    }

    /// Runs a historical backtest for `symbol`. Slow: the service fetches
    /// bars and simulates the strategy before answering.
    pub async fn run_backtest(&self, symbol: &str) -> Result<BacktestReport, Error> {
        let url = format!("{}/api/backtest/{}", self.base_url, symbol);
        debug!("POST {url}");
        let response = self.http.post(&url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        interpret_response(status, &body)
    }

    /// Starts a live paper-trading session for `symbol`.
    pub async fn start_live_trade(&self, symbol: &str) -> Result<LiveTradeAck, Error> {
        let url = format!("{}/api/livetrade/start/{}", self.base_url, symbol);
        debug!("POST {url}");
        let response = self.http.post(&url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        interpret_response(status, &body)
    }

    /// Stops the live paper-trading session for `symbol`.
    pub async fn stop_live_trade(&self, symbol: &str) -> Result<LiveTradeAck, Error> {
        let url = format!("{}/api/livetrade/stop/{}", self.base_url, symbol);
        debug!("POST {url}");
        let response = self.http.post(&url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        interpret_response(status, &body)
    }
}

/// Maps a raw response onto the typed result: a non-success status surfaces
/// the body's `detail` field when it parses, a success body must match the
/// expected shape exactly.
fn interpret_response<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> Result<T, Error> {
    if !status.is_success() {
        let detail = serde_json::from_slice::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.detail);
        return Err(Error::Api {
            status: status.as_u16(),
            detail,
        });
    }
    Ok(serde_json::from_slice(body)?)
}
