use algobot::{Account, BacktestReport, Error};
use tracing::debug;

// ---- symbol context ----

/// The one ticker symbol shared by every action panel.
///
/// Stored upper-cased. The empty string means "nothing selected" and keeps
/// every action disabled; whether a non-empty symbol is a real instrument is
/// left to the service.
#[derive(Debug, Clone, Default)]
pub struct SymbolField {
    value: String,
}

impl SymbolField {
    pub fn set(&mut self, raw: &str) {
        self.value = raw.to_uppercase();
    }

    pub fn get(&self) -> &str {
        &self.value
    }

    pub fn is_set(&self) -> bool {
        !self.value.is_empty()
    }
}

// ---- backtest action ----

/// Lifecycle of the most recent backtest request.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum BacktestState {
    #[default]
    Idle,
    Running,
    Succeeded(BacktestReport),
    Failed(String),
}

/// Shown when the call dies before the service answers. The first request
/// after a deploy can take the hosting environment 20-30 seconds to serve.
pub const BACKTEST_TRANSPORT_MSG: &str = "Make sure the entered symbol is valid. If it is, \
    please wait 20-30 seconds for the backend server to wake up (cold start).";

const BACKTEST_GENERIC_MSG: &str = "Failed to run backtest.";

/// Controller for the backtest panel.
///
/// Every invocation gets a fresh sequence number and a settlement is dropped
/// unless it echoes the latest one, so a slow response can never overwrite
/// the result of a newer run.
#[derive(Debug, Default)]
pub struct BacktestController {
    seq: u64,
    state: BacktestState,
}

impl BacktestController {
    pub fn state(&self) -> &BacktestState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, BacktestState::Running)
    }

    /// A run may start only with a symbol selected and no run in flight.
    pub fn can_run(&self, symbol: &SymbolField) -> bool {
        symbol.is_set() && !self.is_running()
    }

    /// Discards any previous result and enters `Running`. Returns the
    /// sequence number the settlement must echo.
    pub fn begin(&mut self) -> u64 {
        self.seq += 1;
        self.state = BacktestState::Running;
        self.seq
    }

    pub fn settle(&mut self, seq: u64, outcome: Result<BacktestReport, Error>) {
        if seq != self.seq {
            debug!("dropping stale backtest settlement (seq {seq}, latest {})", self.seq);
            return;
        }
        self.state = match outcome {
            Ok(report) => BacktestState::Succeeded(report),
            Err(err) => BacktestState::Failed(backtest_failure_text(&err)),
        };
    }
}

fn backtest_failure_text(err: &Error) -> String {
    match err {
        Error::Api {
            detail: Some(detail),
            ..
        } => detail.clone(),
        Error::Api { detail: None, .. } => BACKTEST_GENERIC_MSG.to_string(),
        _ => BACKTEST_TRANSPORT_MSG.to_string(),
    }
}

/// Net profit of a finished run, derived at render time.
pub fn profit_loss(report: &BacktestReport) -> f64 {
    report.final_value - report.starting_value
}

/// Two fractional digits, sign carried through ("-200.00", "523.45").
pub fn format_money(value: f64) -> String {
    format!("{value:.2}")
}

/// Plot points for the close series, in exactly the order the service sent
/// the rows. The x coordinate is the row index; timestamps are labels only.
pub fn chart_points(report: &BacktestReport) -> Vec<[f64; 2]> {
    report
        .chart_data
        .iter()
        .enumerate()
        .map(|(i, p)| [i as f64, p.close])
        .collect()
}

// ---- live trading actions ----

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveAction {
    Start,
    Stop,
}

impl LiveAction {
    fn verb(&self) -> &'static str {
        match self {
            LiveAction::Start => "Starting",
            LiveAction::Stop => "Stopping",
        }
    }

    fn fallback(&self) -> &'static str {
        match self {
            LiveAction::Start => "Failed to start.",
            LiveAction::Stop => "Failed to stop live trading.",
        }
    }
}

/// Latest outcome of a start or stop request.
///
/// `Pending` is set before the request is dispatched so the user gets
/// immediate feedback; only `Confirmed` text actually came from the service
/// and the UI renders the two differently.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LiveStatus {
    #[default]
    None,
    Pending { action: LiveAction, text: String },
    Confirmed(String),
    Rejected(String),
}

/// Controller for the live paper-trading panel.
///
/// Start and stop are tracked separately (either may be issued while the
/// other is in flight) but share the single status line, so whichever valid
/// settlement lands last owns the text.
#[derive(Debug, Default)]
pub struct LiveTradeController {
    start_seq: u64,
    stop_seq: u64,
    status: LiveStatus,
}

impl LiveTradeController {
    pub fn status(&self) -> &LiveStatus {
        &self.status
    }

    pub fn can_act(&self, symbol: &SymbolField) -> bool {
        symbol.is_set()
    }

    /// Optimistically reports the action as underway and returns the
    /// sequence number the settlement must echo.
    pub fn begin(&mut self, action: LiveAction, symbol: &str) -> u64 {
        let seq = match action {
            LiveAction::Start => {
                self.start_seq += 1;
                self.start_seq
            }
            LiveAction::Stop => {
                self.stop_seq += 1;
                self.stop_seq
            }
        };
        self.status = LiveStatus::Pending {
            action,
            text: format!("{} live trading for {symbol}...", action.verb()),
        };
        seq
    }

    pub fn settle(&mut self, action: LiveAction, seq: u64, outcome: Result<String, Error>) {
        let latest = match action {
            LiveAction::Start => self.start_seq,
            LiveAction::Stop => self.stop_seq,
        };
        if seq != latest {
            debug!("dropping stale live settlement (seq {seq}, latest {latest})");
            return;
        }
        self.status = match outcome {
            Ok(message) => LiveStatus::Confirmed(message),
            Err(err) => LiveStatus::Rejected(live_failure_text(action, &err)),
        };
    }
}

/// Start and stop share one failure policy: a structured `detail` from the
/// service is surfaced for both, an unstructured rejection falls back to the
/// action's own message. Transport failures keep each action's historical
/// wording.
fn live_failure_text(action: LiveAction, err: &Error) -> String {
    match err {
        Error::Api {
            detail: Some(detail),
            ..
        } => format!("Error: {detail}"),
        Error::Api { detail: None, .. } => format!("Error: {}", action.fallback()),
        _ => match action {
            LiveAction::Start => format!("Error: {err}"),
            LiveAction::Stop => LiveAction::Stop.fallback().to_string(),
        },
    }
}

// ---- account overview ----

pub const ACCOUNT_UNREACHABLE_MSG: &str = "Could not connect to backend";

/// One-shot account overview. `Loading` until the startup fetch settles;
/// never re-fetched afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum AccountSlot {
    #[default]
    Loading,
    Ready {
        account: Account,
        fetched_at: String,
    },
    Unavailable(String),
}

impl AccountSlot {
    pub fn resolve(&mut self, outcome: Result<Account, Error>, fetched_at: String) {
        *self = match outcome {
            Ok(account) => AccountSlot::Ready {
                account,
                fetched_at,
            },
            Err(Error::Api {
                detail: Some(detail),
                ..
            }) => AccountSlot::Unavailable(detail),
            Err(_) => AccountSlot::Unavailable(ACCOUNT_UNREACHABLE_MSG.to_string()),
        };
    }
}
