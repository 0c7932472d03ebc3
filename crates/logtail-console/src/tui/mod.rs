/*
[INPUT]:  ConsoleConfig, session controller, diagnostics log buffer
[OUTPUT]: Ratatui-based console: log table, command input, history, diagnostics
[POS]:    TUI module for the logtail-console binary
[UPDATE]: When changing TUI layout, keybindings, or runtime controls
*/

mod app;
mod events;
mod log_buffer;
mod runtime;
mod terminal;
mod ui;

pub use log_buffer::{LOG_BUFFER_CAPACITY, LogBuffer, LogBufferHandle, LogWriterFactory};
pub use runtime::run_tui_with_log;
