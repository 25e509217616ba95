//! Asynchronous client for the AlgoBot trading service.
//!
//! Wraps the REST endpoints the dashboard drives: the account snapshot, the
//! backtest runner and the live paper-trading session controls. The client
//! does no retrying and enforces no timeouts; callers decide how failures
//! surface to the user.

mod config;
mod error;
mod rest;
mod types;

pub use config::{ClientConfig, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use error::Error;
pub use rest::RestClient;
pub use types::{Account, BacktestReport, ChartPoint, LiveTradeAck, ServiceStatus};
