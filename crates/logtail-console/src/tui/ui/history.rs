/*
[INPUT]:  Session command history and its cursor
[OUTPUT]: History list panel, newest first, cursor highlighted
[POS]:    TUI UI history panel
[UPDATE]: When changing history rendering
*/

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

use crate::tui::app::App;
use crate::tui::runtime::border_style;

pub(in crate::tui) fn draw_history(frame: &mut ratatui::Frame, area: ratatui::layout::Rect, app: &App) {
    let history = app.state().history();
    let items = if history.is_empty() {
        vec![ListItem::new("No commands yet")]
    } else {
        history
            .commands()
            .iter()
            .map(|cmd| ListItem::new(cmd.as_str()))
            .collect()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(format!(
                    "History ({})  [Up/Down] recall  [Enter] edit  [r] refresh",
                    history.len()
                )),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    let mut list_state = ListState::default().with_selected(history.cursor());
    frame.render_stateful_widget(list, area, &mut list_state);
}
