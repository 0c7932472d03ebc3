/*
[INPUT]:  TUI app state and session state
[OUTPUT]: UI component render functions and module exports
[POS]:    TUI UI module root
[UPDATE]: When adding a panel
*/

mod alerts;
mod diagnostics;
mod history;
mod inputs;
mod layout;
mod logs;

pub(in crate::tui) use alerts::{alerts_height, draw_alerts};
pub(in crate::tui) use diagnostics::draw_diagnostics;
pub(in crate::tui) use history::draw_history;
pub(in crate::tui) use inputs::draw_input;
pub(in crate::tui) use layout::{draw_status, draw_tabs};
pub(in crate::tui) use logs::draw_log_table;
