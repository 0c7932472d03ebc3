/*
[INPUT]:  Session alerts, newest first
[OUTPUT]: Alert banner panel
[POS]:    TUI UI alerts panel
[UPDATE]: When changing how request failures are shown
*/

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use logtail_console::session::Alert;

const MAX_SHOWN: usize = 3;

/// Panel height for `count` alerts; zero hides the panel.
pub(in crate::tui) fn alerts_height(count: usize) -> u16 {
    if count == 0 {
        0
    } else {
        count.min(MAX_SHOWN) as u16 + 2
    }
}

pub(in crate::tui) fn draw_alerts(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    alerts: &[Alert],
) {
    let marker = Style::default()
        .fg(Color::White)
        .bg(Color::Red)
        .add_modifier(Modifier::BOLD);
    let lines = alerts
        .iter()
        .take(MAX_SHOWN)
        .map(|alert| {
            Line::from(vec![
                Span::styled(" ! ", marker),
                Span::raw(" "),
                Span::styled(alert.message.clone(), Style::default().fg(Color::LightRed)),
            ])
        })
        .collect::<Vec<_>>();

    let mut title = String::from("Alerts [F9] dismiss");
    if alerts.len() > MAX_SHOWN {
        title.push_str(&format!(" (+{} more)", alerts.len() - MAX_SHOWN));
    }
    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(title),
    );
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_tracks_alert_count() {
        assert_eq!(alerts_height(0), 0);
        assert_eq!(alerts_height(1), 3);
        assert_eq!(alerts_height(7), 5);
    }
}
