use serde::Deserialize;

/// Health probe response.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceStatus {
    pub status: String,
}

/// Account overview as reported by the trading service.
///
/// Balance fields arrive as decimal strings and are displayed verbatim, so
/// they stay text instead of being parsed into floats.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Account {
    pub status: String,
    pub account_number: String,
    pub portfolio_value: String,
    pub buying_power: String,
    pub cash: String,
}

/// One row of the price series returned with a backtest.
///
/// The service sends full OHLCV records; only the timestamp label and the
/// close are read, the rest is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChartPoint {
    pub timestamp: String,
    pub close: f64,
}

/// A completed backtest run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BacktestReport {
    pub symbol: String,
    pub starting_value: f64,
    pub final_value: f64,
    #[serde(default)]
    pub chart_data: Vec<ChartPoint>,
}

/// Acknowledgement from the live trading start/stop endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct LiveTradeAck {
    pub message: String,
}

/// Body shape the service uses for application-level failures.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_account_snapshot() {
        let body = r#"{
            "status": "ACTIVE",
            "account_number": "PA3ABC123",
            "portfolio_value": "100078.55",
            "buying_power": "200157.10",
            "cash": "100078.55"
        }"#;
        let account: Account = serde_json::from_str(body).unwrap();
        assert_eq!(account.status, "ACTIVE");
        assert_eq!(account.cash, "100078.55");
    }

    #[test]
    fn backtest_rows_keep_order_and_ignore_extra_columns() {
        let body = r#"{
            "symbol": "AAPL",
            "starting_value": 100000,
            "final_value": 100523.45,
            "chart_data": [
                {"timestamp": "2024-03-02", "open": 10.0, "high": 12.0,
                 "low": 9.0, "close": 11.0, "volume": 1000, "openinterest": 0},
                {"timestamp": "2024-03-01", "open": 11.0, "high": 13.0,
                 "low": 10.0, "close": 12.5, "volume": 900, "openinterest": 0}
            ]
        }"#;
        let report: BacktestReport = serde_json::from_str(body).unwrap();
        assert_eq!(report.starting_value, 100000.0);
        // out-of-order timestamps stay in array order
        assert_eq!(report.chart_data[0].timestamp, "2024-03-02");
        assert_eq!(report.chart_data[1].timestamp, "2024-03-01");
        assert_eq!(report.chart_data[0].close, 11.0);
    }

    #[test]
    fn missing_chart_data_defaults_to_empty() {
        let body = r#"{"symbol": "TSLA", "starting_value": 1.0, "final_value": 2.0}"#;
        let report: BacktestReport = serde_json::from_str(body).unwrap();
        assert!(report.chart_data.is_empty());
    }

    #[test]
    fn live_ack_requires_a_message() {
        assert!(serde_json::from_str::<LiveTradeAck>(r#"{"detail": "nope"}"#).is_err());
        let ack: LiveTradeAck =
            serde_json::from_str(r#"{"message": "Live trading started for AAPL"}"#).unwrap();
        assert_eq!(ack.message, "Live trading started for AAPL");
    }
}
