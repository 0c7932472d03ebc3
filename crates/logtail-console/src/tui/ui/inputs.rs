/*
[INPUT]:  tui-input Input values and focus
[OUTPUT]: Single-line input boxes with a horizontally scrolled cursor
[POS]:    TUI UI command and search inputs
[UPDATE]: When changing input rendering
*/

use ratatui::widgets::{Block, Borders, Paragraph};
use tui_input::Input;

use crate::tui::runtime::{border_style, focused_border_style};

pub(in crate::tui) fn draw_input(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    input: &Input,
    title: &str,
    focused: bool,
) {
    // Borders plus one cell for the cursor at the end of the text.
    let width = area.width.max(3) - 3;
    let scroll = input.visual_scroll(width as usize);
    let border = if focused {
        focused_border_style()
    } else {
        border_style()
    };

    let widget = Paragraph::new(input.value())
        .scroll((0, scroll as u16))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(title.to_string()),
        );
    frame.render_widget(widget, area);

    if focused {
        let x = input.visual_cursor().max(scroll) - scroll + 1;
        frame.set_cursor_position((area.x + x as u16, area.y + 1));
    }
}
