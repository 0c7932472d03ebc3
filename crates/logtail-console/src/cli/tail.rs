/*
[INPUT]:  ConsoleConfig, tail options (day, filter, once), shutdown token
[OUTPUT]: New log rows printed to stdout, oldest first
[POS]:    CLI headless tail - drives the session core without a terminal UI
[UPDATE]: When changing tail output format or exit rules
*/

use std::io::{self, Write};
use std::sync::Arc;

use anyhow::{Result, anyhow, bail};
use chrono::{Local, NaiveDate};
use console::style;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use logtail_console::session::{LogRow, Msg, RowStyle, SessionState};
use logtail_console::{ConsoleConfig, Controller};

use crate::build_client;

#[derive(Debug, Clone, Default)]
pub struct TailOptions {
    pub day: Option<NaiveDate>,
    pub filter: Option<String>,
    pub once: bool,
}

pub async fn run_tail(
    config: &ConsoleConfig,
    options: TailOptions,
    shutdown: CancellationToken,
) -> Result<()> {
    let client = build_client(config)?;
    let today = Local::now().date_naive();
    let day = options.day.unwrap_or(today);
    if day > today {
        bail!("cannot tail {day}: the day has not started yet");
    }

    let mut controller = Controller::starting_at(
        Arc::new(client),
        config.session_settings(),
        day,
        today,
    );
    if let Some(filter) = options.filter {
        controller.handle(Msg::SearchChanged(filter));
    }

    // Past days and --once stop after the first page.
    let follow = !options.once && controller.state().is_polling();
    info!(day = %day, follow, "tail started");
    controller.handle(Msg::Poll { force: true });

    let mut ticker = tokio::time::interval(config.poll_interval());
    ticker.tick().await;
    let mut stdout = io::stdout();

    let result = loop {
        tokio::select! {
            _ = shutdown.cancelled() => {
                info!("shutdown requested");
                break Ok(());
            }
            _ = ticker.tick(), if follow => {
                controller.handle(Msg::Tick);
            }
            maybe_msg = controller.next_completion() => {
                let Some(msg) = maybe_msg else {
                    break Ok(());
                };
                let page = matches!(msg, Msg::LogsLoaded { .. });
                let watermark = controller.state().last_log_id();
                let alerts = controller.state().alerts().len();
                controller.handle(msg);

                let state = controller.state();
                if state.alerts().len() > alerts {
                    let message = state
                        .alerts()
                        .first()
                        .map(|alert| alert.message.clone())
                        .unwrap_or_default();
                    break Err(anyhow!("log poll failed: {message}"));
                }
                let printed = print_new_rows(&mut stdout, state, watermark)?;
                debug!(printed, watermark = state.last_log_id(), "page applied");
                if page && !follow {
                    break Ok(());
                }
            }
        }
    };

    controller.shutdown();
    result
}

/// Rows at or above the previous watermark arrived with the last page.
fn print_new_rows(out: &mut impl Write, state: &SessionState, watermark: i64) -> Result<usize> {
    let mut printed = 0;
    let fresh: Vec<&LogRow> = state
        .table()
        .visible_rows()
        .filter(|row| row.id.is_some_and(|id| id >= watermark))
        .collect();
    for row in fresh.into_iter().rev() {
        writeln!(out, "{}", format_row(row))?;
        printed += 1;
    }
    out.flush()?;
    Ok(printed)
}

fn format_row(row: &LogRow) -> String {
    let line = format!("{}  {}", row.date, row.message);
    match row.style {
        RowStyle::Danger => style(line).red().bold().to_string(),
        RowStyle::Warning => style(line).yellow().to_string(),
        RowStyle::Active => style(line).cyan().to_string(),
        RowStyle::Default => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logtail_adapter::{LogEntry, Severity};
    use logtail_console::session::{SessionSettings, update};

    fn entry(id: i64, message: &str) -> LogEntry {
        LogEntry {
            id,
            date: "16/10/2026 10:00:00".to_string(),
            message: message.to_string(),
            kind: Severity::Normal,
        }
    }

    fn state_with_pages(pages: &[Vec<LogEntry>]) -> (SessionState, Vec<i64>) {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).expect("date");
        let mut state = SessionState::new(SessionSettings::default(), today);
        let mut watermarks = Vec::new();
        for page in pages {
            watermarks.push(state.last_log_id());
            let epoch = state.epoch();
            update(&mut state, Msg::Poll { force: true });
            update(
                &mut state,
                Msg::LogsLoaded {
                    epoch,
                    outcome: Ok(page.clone()),
                },
            );
        }
        (state, watermarks)
    }

    #[test]
    fn prints_only_rows_of_the_latest_page_oldest_first() {
        let (state, watermarks) = state_with_pages(&[
            vec![entry(1, "boot"), entry(2, "ready")],
            vec![entry(3, "door open"), entry(4, "door closed")],
        ]);
        let mut out = Vec::new();
        let printed = print_new_rows(&mut out, &state, watermarks[1]).expect("print");
        assert_eq!(printed, 2);
        let text = String::from_utf8(out).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].ends_with("door open"));
        assert!(lines[1].ends_with("door closed"));
    }

    #[test]
    fn first_page_prints_everything() {
        let (state, watermarks) = state_with_pages(&[vec![entry(7, "a"), entry(8, "b")]]);
        let mut out = Vec::new();
        let printed = print_new_rows(&mut out, &state, watermarks[0]).expect("print");
        assert_eq!(printed, 2);
    }
}
