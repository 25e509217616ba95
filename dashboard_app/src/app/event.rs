use algobot::{Account, BacktestReport, Error};

use super::state::LiveAction;

/// Requests the panels send to the exec loop. The symbol a request acts on
/// is captured here at dispatch time, so a later edit of the input field
/// cannot change what an in-flight request targets.
#[derive(Debug, Clone)]
pub enum ApiCommand {
    RunBacktest { symbol: String, seq: u64 },
    LiveTrade { action: LiveAction, symbol: String, seq: u64 },
}

/// Settlements the exec loop sends back to the panels.
#[derive(Debug)]
pub enum NetEvent {
    BackendProbe {
        ok: bool,
    },
    Account(Result<Account, Error>),
    BacktestDone {
        seq: u64,
        outcome: Result<BacktestReport, Error>,
    },
    LiveDone {
        action: LiveAction,
        seq: u64,
        outcome: Result<String, Error>,
    },
}
