//! Dashboard window: account overview, symbol entry and the action panels.

pub mod event;
pub mod state;

use std::time::Duration;

use chrono::Local;
use eframe::egui;
use egui::{Color32, RichText};
use egui_plot::{GridMark, Line, Plot, PlotPoints};
use tokio::sync::mpsc;

use algobot::BacktestReport;
use event::{ApiCommand, NetEvent};
use state::{
    chart_points, format_money, profit_loss, AccountSlot, BacktestController, BacktestState,
    LiveAction, LiveStatus, LiveTradeController, SymbolField,
};

// close-price line color from the original dashboard
const UP_GREEN: Color32 = Color32::from_rgb(74, 194, 108);
const ERR_RED: Color32 = Color32::from_rgb(220, 50, 47);

pub struct DashboardApp {
    symbol: SymbolField,
    account: AccountSlot,
    backtest: BacktestController,
    live: LiveTradeController,
    backend_ok: Option<bool>,

    cmd_tx: mpsc::Sender<ApiCommand>,
    event_rx: mpsc::Receiver<NetEvent>,
}

impl DashboardApp {
    pub fn new(cmd_tx: mpsc::Sender<ApiCommand>, event_rx: mpsc::Receiver<NetEvent>) -> Self {
        Self {
            symbol: SymbolField::default(),
            account: AccountSlot::default(),
            backtest: BacktestController::default(),
            live: LiveTradeController::default(),
            backend_ok: None,

            cmd_tx,
            event_rx,
        }
    }

    /// Drain exec settlements; everything else happens in the panels.
    fn tick(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            match event {
                NetEvent::BackendProbe { ok } => self.backend_ok = Some(ok),
                NetEvent::Account(outcome) => {
                    let fetched_at = Local::now().format("%H:%M:%S").to_string();
                    self.account.resolve(outcome, fetched_at);
                }
                NetEvent::BacktestDone { seq, outcome } => self.backtest.settle(seq, outcome),
                NetEvent::LiveDone {
                    action,
                    seq,
                    outcome,
                } => self.live.settle(action, seq, outcome),
            }
        }
    }

    // ---- top bar ----
    fn ui_top_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("AlgoBot");
            ui.separator();
            ui.label("Trading Bot Dashboard");
            ui.separator();
            match self.backend_ok {
                None => {
                    ui.label("backend: probing...");
                }
                Some(true) => {
                    ui.colored_label(UP_GREEN, "backend: ok");
                }
                Some(false) => {
                    ui.colored_label(ERR_RED, "backend: unreachable");
                }
            }
        });
    }

    // ---- account overview ----
    fn ui_account(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.heading("Account Overview");
            match &self.account {
                AccountSlot::Loading => {
                    ui.label("Loading account data...");
                }
                AccountSlot::Unavailable(msg) => {
                    ui.colored_label(ERR_RED, msg);
                }
                AccountSlot::Ready {
                    account,
                    fetched_at,
                } => {
                    ui.label(format!("Status: {}", account.status));
                    ui.label(format!("Account Number: {}", account.account_number));
                    ui.label(format!("Portfolio Value: ${}", account.portfolio_value));
                    ui.label(format!("Buying Power: ${}", account.buying_power));
                    ui.label(format!("Cash: ${}", account.cash));
                    ui.small(format!("fetched at {fetched_at}"));
                }
            }
        });
    }

    // ---- symbol entry ----
    fn ui_symbol(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.heading("Enter Stock Symbol");
            let mut text = self.symbol.get().to_string();
            let response = ui.text_edit_singleline(&mut text);
            if response.changed() {
                self.symbol.set(&text);
            }
            ui.small("e.g. AAPL, TSLA, MSFT");
        });
    }

    // ---- backtest ----
    fn ui_backtest(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.heading("Run a Backtest");

            let label = if self.backtest.is_running() {
                "Running..."
            } else {
                "Run Backtest"
            };
            let enabled = self.backtest.can_run(&self.symbol);
            if ui.add_enabled(enabled, egui::Button::new(label)).clicked() {
                let symbol = self.symbol.get().to_string();
                let seq = self.backtest.begin();
                let _ = self.cmd_tx.try_send(ApiCommand::RunBacktest { symbol, seq });
            }

            match self.backtest.state() {
                BacktestState::Idle => {}
                BacktestState::Running => {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Running backtest...");
                    });
                }
                BacktestState::Failed(msg) => {
                    ui.colored_label(ERR_RED, msg);
                }
                BacktestState::Succeeded(report) => {
                    let report = report.clone();
                    self.ui_backtest_result(ui, &report);
                }
            }
        });
    }

    fn ui_backtest_result(&self, ui: &mut egui::Ui, report: &BacktestReport) {
        ui.separator();
        ui.label(RichText::new(format!("Backtest Result for: {}", report.symbol)).strong());
        ui.label(format!(
            "Starting Value: ${}",
            format_money(report.starting_value)
        ));
        ui.label(format!("Final Value: ${}", format_money(report.final_value)));

        let pnl = profit_loss(report);
        let color = if pnl >= 0.0 { UP_GREEN } else { ERR_RED };
        ui.colored_label(color, format!("Profit/Loss: ${}", format_money(pnl)));

        if !report.chart_data.is_empty() {
            self.ui_chart(ui, report);
        }
    }

    fn ui_chart(&self, ui: &mut egui::Ui, report: &BacktestReport) {
        let points = chart_points(report);
        let labels: Vec<String> = report
            .chart_data
            .iter()
            .map(|p| p.timestamp.clone())
            .collect();

        Plot::new("backtest_chart")
            .height(260.0)
            .allow_drag(true)
            .allow_zoom(true)
            .allow_scroll(true)
            .x_axis_formatter(move |mark: GridMark, _range, _| {
                // x positions are row indices; label the integer marks with
                // the row's own timestamp
                let idx = mark.value.round();
                if idx >= 0.0 && (mark.value - idx).abs() < 0.25 {
                    labels.get(idx as usize).cloned().unwrap_or_default()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(PlotPoints::from(points))
                        .color(UP_GREEN)
                        .name("Close Price"),
                );
            });
    }

    // ---- live trading ----
    fn ui_live(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.heading("Live Paper Trading");

            let enabled = self.live.can_act(&self.symbol);
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(enabled, egui::Button::new("Start Live"))
                    .clicked()
                {
                    self.send_live(LiveAction::Start);
                }
                if ui
                    .add_enabled(enabled, egui::Button::new("Stop Live"))
                    .clicked()
                {
                    self.send_live(LiveAction::Stop);
                }
            });

            match self.live.status() {
                LiveStatus::None => {}
                LiveStatus::Pending { text, .. } => {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(format!("Status: {text}"));
                    });
                }
                LiveStatus::Confirmed(msg) => {
                    ui.label(format!("Status: {msg}"));
                }
                LiveStatus::Rejected(msg) => {
                    ui.colored_label(ERR_RED, format!("Status: {msg}"));
                }
            }
        });
    }

    fn send_live(&mut self, action: LiveAction) {
        let symbol = self.symbol.get().to_string();
        let seq = self.live.begin(action, &symbol);
        let _ = self.cmd_tx.try_send(ApiCommand::LiveTrade {
            action,
            symbol,
            seq,
        });
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.tick();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.ui_top_bar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.ui_account(ui);
                    self.ui_symbol(ui);
                    self.ui_backtest(ui);
                    self.ui_live(ui);
                });
        });

        // keep polling the event channel while requests are in flight
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
