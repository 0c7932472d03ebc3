/*
[INPUT]:  Current tab, session day and polling state
[OUTPUT]: Tab bar and status line
[POS]:    TUI UI layout chrome
[UPDATE]: When adding tabs or status fields
*/

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};

use crate::tui::app::{App, Tab};
use crate::tui::runtime::{border_style, header_style};

pub(in crate::tui) fn draw_tabs(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    current_tab: Tab,
) {
    let titles = Tab::ALL
        .iter()
        .map(|tab| Line::from(tab.title()))
        .collect::<Vec<_>>();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title("Tabs"),
        )
        .highlight_style(header_style())
        .select(current_tab.index());

    frame.render_widget(tabs, area);
}

pub(in crate::tui) fn draw_status(frame: &mut ratatui::Frame, area: ratatui::layout::Rect, app: &App) {
    let state = app.state();
    let label_style = Style::default().add_modifier(Modifier::BOLD);

    let (mode, mode_style) = if state.viewing_history() {
        ("history", Style::default().fg(Color::Yellow))
    } else {
        ("live", Style::default().fg(Color::LightGreen))
    };
    let polling_style = if state.is_polling() {
        Style::default().fg(Color::LightGreen)
    } else {
        Style::default().fg(Color::LightRed)
    };

    let mut spans = vec![
        Span::styled("Day ", label_style),
        Span::raw(state.day().format("%Y-%m-%d").to_string()),
        Span::raw(" "),
        Span::styled(format!("[{mode}]"), mode_style),
        Span::raw("  "),
        Span::styled("Polling ", label_style),
        Span::styled(if state.is_polling() { "on" } else { "off" }, polling_style),
        Span::raw("  "),
        Span::styled("Level ", label_style),
        Span::raw(state.settings().log_level.to_string()),
        Span::raw("  "),
        Span::styled("Next id ", label_style),
        Span::raw(state.last_log_id().to_string()),
    ];
    if state.poll_pending() {
        spans.push(Span::styled("  fetching...", Style::default().fg(Color::DarkGray)));
    }

    let widget = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title("Session"),
    );
    frame.render_widget(widget, area);
}
