/*
[INPUT]:  ConsoleConfig, log buffer, crossterm input, session completions
[OUTPUT]: Ratatui-based TUI run loop, frame layout, and shared styles
[POS]:    TUI runtime loop and shared helpers
[UPDATE]: When changing TUI layout, keybindings, or runtime controls
*/

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chrono::Local;
use crossterm::event::Event as CrosstermEvent;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::info;

use logtail_console::session::{Msg, RowStyle};
use logtail_console::{ConsoleConfig, Controller};

use super::LogBufferHandle;
use super::app::{App, Focus, Tab};
use super::events::handle_key_event;
use super::terminal::TerminalGuard;
use super::ui::*;
use crate::build_client;

const UI_TICK_INTERVAL: Duration = Duration::from_millis(250);
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(200);

enum UiEvent {
    Input(CrosstermEvent),
}

pub async fn run_tui_with_log(config: ConsoleConfig, log_buffer: LogBufferHandle) -> Result<()> {
    let client = build_client(&config)?;
    let controller = Controller::new(
        Arc::new(client),
        config.session_settings(),
        Local::now().date_naive(),
    );

    let mut terminal = TerminalGuard::new()?;
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let input_shutdown = CancellationToken::new();
    let input_shutdown_clone = input_shutdown.clone();

    tokio::task::spawn_blocking(move || {
        while !input_shutdown_clone.is_cancelled() {
            if crossterm::event::poll(INPUT_POLL_INTERVAL).unwrap_or(false) {
                if let Ok(event) = crossterm::event::read() {
                    let _ = event_tx.send(UiEvent::Input(event));
                }
            }
        }
    });

    let mut app = App::new(controller, log_buffer);
    info!(base_url = %config.base_url, day = %app.state().day(), "console started");
    app.handle(Msg::Start);

    let mut ui_tick = tokio::time::interval(UI_TICK_INTERVAL);
    let poll_interval = config.poll_interval();
    let mut poll_tick = tokio::time::interval_at(Instant::now() + poll_interval, poll_interval);
    poll_tick.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut should_quit = false;

    terminal.draw(|frame| draw_ui(frame, &app))?;
    while !should_quit {
        tokio::select! {
            _ = ui_tick.tick() => {}
            _ = poll_tick.tick() => {
                app.handle(Msg::Tick);
            }
            maybe_msg = app.controller.next_completion() => {
                if let Some(msg) = maybe_msg {
                    app.handle(msg);
                }
            }
            maybe_event = event_rx.recv() => {
                match maybe_event {
                    Some(UiEvent::Input(CrosstermEvent::Key(key))) => {
                        should_quit = handle_key_event(&mut app, key);
                    }
                    Some(_) => {}
                    None => should_quit = true,
                }
            }
        }

        terminal.draw(|frame| draw_ui(frame, &app))?;
    }

    app.controller.shutdown();
    input_shutdown.cancel();
    info!("console stopped");
    Ok(())
}

fn draw_ui(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let alerts = app.state().alerts();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(alerts_height(alerts.len())),
            Constraint::Min(6),
            Constraint::Length(3),
            Constraint::Length(4),
        ])
        .split(area);

    draw_status(frame, layout[0], app);
    if !alerts.is_empty() {
        draw_alerts(frame, layout[1], alerts);
    }

    match app.current_tab {
        Tab::Logs => draw_logs_tab(frame, layout[2], app),
        Tab::History => draw_history(frame, layout[2], app),
        Tab::Diagnostics => draw_diagnostics(frame, layout[2], &app.log_buffer),
    }

    draw_tabs(frame, layout[3], app.current_tab);
    draw_footer(frame, layout[4], app);
}

fn draw_logs_tab(frame: &mut ratatui::Frame, area: Rect, app: &App) {
    let content = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);
    let inputs = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(content[0]);

    draw_input(
        frame,
        inputs[0],
        &app.command_input,
        "Command",
        app.focus == Focus::Command,
    );
    draw_input(
        frame,
        inputs[1],
        &app.search_input,
        "Search",
        app.focus == Focus::Search,
    );
    draw_log_table(frame, content[1], app);
}

fn draw_footer(frame: &mut ratatui::Frame, area: Rect, app: &App) {
    let key_style = Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let line1 = Line::from(vec![
        Span::styled("[Tab]", key_style),
        Span::raw(" Focus  "),
        Span::styled("[Enter]", key_style),
        Span::raw(" Run  "),
        Span::styled("[Up/Down]", key_style),
        Span::raw(" History  "),
        Span::styled("[Esc]", key_style),
        Span::raw(" Clear  "),
        Span::styled("[Ctrl+B]", key_style),
        Span::raw(" Board cmd  "),
        Span::styled("[Ctrl+Q]", key_style),
        Span::raw(" Quit"),
    ]);
    let line2 = Line::from(vec![
        Span::styled("[F2]", key_style),
        Span::raw(" Tab  "),
        Span::styled("[F5]", key_style),
        Span::raw(format!(" {}  ", app.state().polling_label())),
        Span::styled("[F6]", key_style),
        Span::raw(" Older day  "),
        Span::styled("[F7]", key_style),
        Span::raw(" Newer day  "),
        Span::styled("[F8]", key_style),
        Span::raw(" Clear logs  "),
        Span::raw(format!("Status: {}", app.status_message)),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title("Hotkeys");
    let text = Text::from(vec![line1, line2]);
    let widget = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

pub(crate) fn border_style() -> Style {
    Style::default().fg(Color::Magenta)
}

pub(crate) fn focused_border_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn header_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn row_style(style: RowStyle) -> Style {
    match style {
        RowStyle::Danger => Style::default()
            .fg(Color::LightRed)
            .add_modifier(Modifier::BOLD),
        RowStyle::Warning => Style::default().fg(Color::Yellow),
        RowStyle::Active => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        RowStyle::Default => Style::default(),
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 32)).expect("terminal");
        terminal.draw(|frame| draw_ui(frame, app)).expect("draw");
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[tokio::test]
    async fn logs_tab_shows_session_controls() {
        let app = App::offline();
        let screen = render(&app);
        assert!(screen.contains("Command"));
        assert!(screen.contains("Search"));
        assert!(screen.contains("No log entries"));
        assert!(screen.contains("[F5] Stop"));
        assert!(!screen.contains("Alerts"));
    }

    #[tokio::test]
    async fn echoed_command_and_paused_label_render() {
        let mut app = App::offline();
        app.handle(Msg::Submit("status".to_string()));
        app.handle(Msg::TogglePolling);
        let screen = render(&app);
        assert!(screen.contains("status"));
        assert!(screen.contains("[F5] Continue"));
        assert!(screen.contains("Polling off"));
    }

    #[tokio::test]
    async fn history_tab_lists_commands() {
        let mut app = App::offline();
        app.handle(Msg::HistoryLoaded(Ok(vec![
            logtail_adapter::CommandRecord {
                id: 1,
                cmd: "first".to_string(),
            },
            logtail_adapter::CommandRecord {
                id: 2,
                cmd: "second".to_string(),
            },
        ])));
        app.set_tab(Tab::History);
        let screen = render(&app);
        assert!(screen.contains("History (2)"));
        assert!(screen.contains("second"));
    }
}
