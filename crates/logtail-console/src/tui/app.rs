/*
[INPUT]:  Session controller, diagnostics log buffer, key-driven edits
[OUTPUT]: App state for rendering: tabs, focus, text inputs, table scroll
[POS]:    TUI app state
[UPDATE]: When adding tabs, focus targets, or view-only state
*/

use chrono::{Local, NaiveDate};
use tui_input::{Input, InputRequest};

use logtail_console::Controller;
use logtail_console::session::{Msg, SessionState};

use crate::tui::LogBufferHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Tab {
    Logs,
    History,
    Diagnostics,
}

impl Tab {
    pub(super) const ALL: [Tab; 3] = [Tab::Logs, Tab::History, Tab::Diagnostics];

    pub(super) fn title(self) -> &'static str {
        match self {
            Tab::Logs => "Logs",
            Tab::History => "History",
            Tab::Diagnostics => "Diagnostics",
        }
    }

    pub(super) fn index(self) -> usize {
        match self {
            Tab::Logs => 0,
            Tab::History => 1,
            Tab::Diagnostics => 2,
        }
    }

    fn next(self) -> Self {
        match self {
            Tab::Logs => Tab::History,
            Tab::History => Tab::Diagnostics,
            Tab::Diagnostics => Tab::Logs,
        }
    }
}

/// Widget receiving key input on the Logs tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Focus {
    Command,
    Search,
    Table,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Command => Focus::Search,
            Focus::Search => Focus::Table,
            Focus::Table => Focus::Command,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Command => Focus::Table,
            Focus::Search => Focus::Command,
            Focus::Table => Focus::Search,
        }
    }
}

pub(super) struct App {
    pub(super) controller: Controller,
    pub(super) command_input: Input,
    pub(super) search_input: Input,
    pub(super) focus: Focus,
    pub(super) current_tab: Tab,
    pub(super) log_buffer: LogBufferHandle,
    /// First visible row of the log table, counted in visible rows.
    pub(super) table_offset: usize,
    pub(super) status_message: String,
}

impl App {
    pub(super) fn new(controller: Controller, log_buffer: LogBufferHandle) -> Self {
        let mut app = Self {
            controller,
            command_input: Input::default(),
            search_input: Input::default(),
            focus: Focus::Command,
            current_tab: Tab::Logs,
            log_buffer,
            table_offset: 0,
            status_message: "Ready".to_string(),
        };
        app.sync_inputs();
        app
    }

    pub(super) fn state(&self) -> &SessionState {
        self.controller.state()
    }

    pub(super) fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    /// Route a message through the session core and refresh the widgets
    /// that mirror session state.
    pub(super) fn handle(&mut self, msg: Msg) {
        self.controller.handle(msg);
        self.sync_inputs();
        self.clamp_offset();
    }

    /// Inputs keep their cursor unless the session rewrote their text.
    fn sync_inputs(&mut self) {
        let state = self.controller.state();
        if state.command_input() != self.command_input.value() {
            self.command_input = Input::new(state.command_input().to_string());
        }
        if state.search() != self.search_input.value() {
            self.search_input = Input::new(state.search().to_string());
        }
    }

    pub(super) fn edit_command(&mut self, request: InputRequest) {
        let changed = self
            .command_input
            .handle(request)
            .is_some_and(|change| change.value);
        if changed {
            let value = self.command_input.value().to_string();
            self.handle(Msg::InputChanged(value));
        }
    }

    pub(super) fn edit_search(&mut self, request: InputRequest) {
        let changed = self
            .search_input
            .handle(request)
            .is_some_and(|change| change.value);
        if changed {
            let value = self.search_input.value().to_string();
            self.table_offset = 0;
            self.handle(Msg::SearchChanged(value));
        }
    }

    pub(super) fn next_tab(&mut self) {
        self.current_tab = self.current_tab.next();
    }

    pub(super) fn set_tab(&mut self, tab: Tab) {
        self.current_tab = tab;
    }

    pub(super) fn cycle_focus(&mut self, forward: bool) {
        self.focus = if forward {
            self.focus.next()
        } else {
            self.focus.prev()
        };
    }

    pub(super) fn scroll(&mut self, delta: isize) {
        self.table_offset = self.table_offset.saturating_add_signed(delta);
        self.clamp_offset();
    }

    pub(super) fn scroll_to_top(&mut self) {
        self.table_offset = 0;
    }

    pub(super) fn scroll_to_bottom(&mut self) {
        self.table_offset = usize::MAX;
        self.clamp_offset();
    }

    fn clamp_offset(&mut self) {
        let visible = self.controller.state().table().visible_count();
        self.table_offset = self.table_offset.min(visible.saturating_sub(1));
    }

    /// Id of the newest alert, if any is showing.
    pub(super) fn newest_alert(&self) -> Option<u64> {
        self.state().alerts().first().map(|alert| alert.id)
    }
}

#[cfg(test)]
impl App {
    /// App wired to an address nothing listens on; requests fail in the background.
    pub(super) fn offline() -> Self {
        use std::sync::{Arc, Mutex as StdMutex};

        use logtail_adapter::ConsoleClient;
        use logtail_console::session::SessionSettings;

        use crate::tui::{LOG_BUFFER_CAPACITY, LogBuffer};

        let client = ConsoleClient::new("http://127.0.0.1:9/").expect("client");
        let controller = Controller::new(
            Arc::new(client),
            SessionSettings::default(),
            Local::now().date_naive(),
        );
        let buffer = Arc::new(StdMutex::new(LogBuffer::new(LOG_BUFFER_CAPACITY)));
        App::new(controller, buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn focus_and_tabs_wrap_around() {
        let mut app = App::offline();
        app.cycle_focus(false);
        assert_eq!(app.focus, Focus::Table);
        app.cycle_focus(true);
        assert_eq!(app.focus, Focus::Command);

        for _ in Tab::ALL {
            app.next_tab();
        }
        assert_eq!(app.current_tab, Tab::Logs);
    }

    #[tokio::test]
    async fn scrolling_an_empty_table_stays_at_top() {
        let mut app = App::offline();
        app.scroll(5);
        assert_eq!(app.table_offset, 0);
        app.scroll_to_bottom();
        assert_eq!(app.table_offset, 0);
    }

    #[tokio::test]
    async fn scrolling_is_bounded_by_visible_rows() {
        let mut app = App::offline();
        for cmd in ["a", "b", "c"] {
            app.handle(Msg::Submit(cmd.to_string()));
        }
        app.scroll(10);
        assert_eq!(app.table_offset, 2);
        app.scroll(-1);
        assert_eq!(app.table_offset, 1);
        app.scroll_to_top();
        assert_eq!(app.table_offset, 0);
    }
}
