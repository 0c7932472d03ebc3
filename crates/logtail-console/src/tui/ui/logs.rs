/*
[INPUT]:  Session log table (visible rows, loading flag), table scroll offset
[OUTPUT]: Log table panel rendered into Ratatui frame
[POS]:    TUI UI log table
[UPDATE]: When changing columns or row styling
*/

use ratatui::layout::Constraint;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use unicode_width::UnicodeWidthStr;

use logtail_console::session::LogRow;

use crate::tui::app::{App, Focus};
use crate::tui::runtime::{border_style, focused_border_style, header_style, row_style};

const MIN_DATE_WIDTH: usize = 10;
const MAX_DATE_WIDTH: usize = 24;

pub(in crate::tui) fn draw_log_table(frame: &mut ratatui::Frame, area: ratatui::layout::Rect, app: &App) {
    let table = app.state().table();
    let border = if app.focus == Focus::Table {
        focused_border_style()
    } else {
        border_style()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(format!(
            "Log {} ({}/{})",
            app.state().day(),
            table.visible_count(),
            table.len()
        ));

    if table.is_loading() || table.is_empty() {
        let placeholder = if table.is_loading() {
            "Loading..."
        } else {
            "No log entries"
        };
        let widget = Paragraph::new(placeholder)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(widget, area);
        return;
    }

    // Borders and header take three lines.
    let available = area.height.saturating_sub(3) as usize;
    let rows: Vec<&LogRow> = table
        .visible_rows()
        .skip(app.table_offset)
        .take(available)
        .collect();

    let date_width = rows
        .iter()
        .map(|row| row.date.width())
        .max()
        .unwrap_or(0)
        .clamp(MIN_DATE_WIDTH, MAX_DATE_WIDTH) as u16;

    let header = Row::new(vec![Cell::from("Date"), Cell::from("Message")]).style(header_style());
    let table_rows = rows.into_iter().map(|row| {
        Row::new(vec![
            Cell::from(row.date.as_str()),
            Cell::from(row.message.as_str()),
        ])
        .style(row_style(row.style))
    });

    let widget = Table::new(table_rows, [
        Constraint::Length(date_width),
        Constraint::Min(10),
    ])
    .header(header)
    .block(block);
    frame.render_widget(widget, area);
}
