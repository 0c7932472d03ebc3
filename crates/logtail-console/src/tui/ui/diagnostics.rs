/*
[INPUT]:  LogBufferHandle contents
[OUTPUT]: Diagnostics panel with the most recent tracing output
[POS]:    TUI UI diagnostics panel
[UPDATE]: When changing diagnostics rendering
*/

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::LogBufferHandle;
use crate::tui::log_buffer::lock_buffer;
use crate::tui::runtime::border_style;

pub(in crate::tui) fn draw_diagnostics(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    buffer: &LogBufferHandle,
) {
    let available = area.height.saturating_sub(2) as usize;
    let (lines, total) = {
        let guard = lock_buffer(buffer);
        (guard.tail(available), guard.line_count())
    };

    let text = if lines.is_empty() {
        vec![Line::from(Span::styled(
            "No diagnostics yet",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        lines
            .into_iter()
            .map(|line| Line::from(Span::raw(line)))
            .collect::<Vec<_>>()
    };
    let widget = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(format!("Diagnostics ({total} lines)")),
    );
    frame.render_widget(widget, area);
}
