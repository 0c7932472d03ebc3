/*
[INPUT]:  Session settings and the current calendar day
[OUTPUT]: SessionState owned by the console controller; alert and failure types
[POS]:    Session core - transient state of one console session
[UPDATE]: When adding state the views need to render
*/

use chrono::NaiveDate;
use logtail_adapter::{ConsoleError, LogLevel};

use super::history::CommandHistory;
use super::table::{DEFAULT_MAX_ROWS, LogTable};

/// Knobs the session core needs from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    pub log_level: LogLevel,
    pub clear_level: LogLevel,
    pub max_rows: usize,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Debug,
            clear_level: LogLevel::Debug,
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Network, HTTP status or decoding problem
    Transport,
    /// Backend answered `success: false`
    Rejected,
}

/// A failed request, detached from the transport error so it can travel
/// through messages and be compared in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl RequestFailure {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Transport,
            message: message.into(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Rejected,
            message: message.into(),
        }
    }

    /// Banner text: transport failures get the `Request Failed:` prefix.
    pub fn alert_text(&self) -> String {
        match self.kind {
            FailureKind::Transport => format!("Request Failed: {}", self.message),
            FailureKind::Rejected => self.message.clone(),
        }
    }
}

impl From<&ConsoleError> for RequestFailure {
    fn from(err: &ConsoleError) -> Self {
        match err {
            ConsoleError::Rejected { message } => RequestFailure::rejected(message.clone()),
            other => RequestFailure::transport(other.to_string()),
        }
    }
}

impl From<ConsoleError> for RequestFailure {
    fn from(err: ConsoleError) -> Self {
        RequestFailure::from(&err)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub id: u64,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct SessionState {
    pub(crate) settings: SessionSettings,
    pub(crate) day: NaiveDate,
    pub(crate) last_log_id: i64,
    pub(crate) polling: bool,
    pub(crate) viewing_history: bool,
    pub(crate) epoch: u64,
    pub(crate) pending_poll: Option<u64>,
    pub(crate) table: LogTable,
    pub(crate) history: CommandHistory,
    pub(crate) search: String,
    pub(crate) command_input: String,
    pub(crate) alerts: Vec<Alert>,
    pub(crate) next_alert_id: u64,
}

impl SessionState {
    /// Fresh session tailing `today`, polling enabled.
    pub fn new(settings: SessionSettings, today: NaiveDate) -> Self {
        let table = LogTable::new(settings.max_rows);
        Self {
            settings,
            day: today,
            last_log_id: 0,
            polling: true,
            viewing_history: false,
            epoch: 0,
            pending_poll: None,
            table,
            history: CommandHistory::default(),
            search: String::new(),
            command_input: String::new(),
            alerts: Vec::new(),
            next_alert_id: 0,
        }
    }

    /// Session opened on `day`; a past day starts paused in history view.
    pub fn starting_at(settings: SessionSettings, day: NaiveDate, today: NaiveDate) -> Self {
        let mut state = Self::new(settings, day);
        if day < today {
            state.polling = false;
            state.viewing_history = true;
        }
        state
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Day cursor
    pub fn day(&self) -> NaiveDate {
        self.day
    }

    /// Watermark: smallest log id not yet displayed
    pub fn last_log_id(&self) -> i64 {
        self.last_log_id
    }

    pub fn is_polling(&self) -> bool {
        self.polling
    }

    /// Label of the stop/continue control
    pub fn polling_label(&self) -> &'static str {
        if self.polling { "Stop" } else { "Continue" }
    }

    /// True while a past day is shown and the "newer" control is available
    pub fn viewing_history(&self) -> bool {
        self.viewing_history
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn poll_pending(&self) -> bool {
        self.pending_poll == Some(self.epoch)
    }

    pub fn table(&self) -> &LogTable {
        &self.table
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn command_input(&self) -> &str {
        &self.command_input
    }

    /// Newest first
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub(crate) fn push_alert(&mut self, message: String) {
        let id = self.next_alert_id;
        self.next_alert_id += 1;
        self.alerts.insert(0, Alert { id, message });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_failure_is_prefixed() {
        let failure = RequestFailure::transport("connection refused");
        assert_eq!(failure.alert_text(), "Request Failed: connection refused");
        let failure = RequestFailure::rejected("You are not logged.");
        assert_eq!(failure.alert_text(), "You are not logged.");
    }

    #[test]
    fn console_error_conversion_keeps_kind() {
        let failure = RequestFailure::from(ConsoleError::Rejected {
            message: "nope".to_string(),
        });
        assert_eq!(failure, RequestFailure::rejected("nope"));

        let failure = RequestFailure::from(ConsoleError::Status {
            code: 404,
            body: "missing".to_string(),
        });
        assert_eq!(failure.kind, FailureKind::Transport);
        assert_eq!(failure.message, "HTTP status 404: missing");
    }

    #[test]
    fn starting_on_a_past_day_is_paused() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).expect("date");
        let yesterday = NaiveDate::from_ymd_opt(2026, 10, 15).expect("date");

        let past = SessionState::starting_at(SessionSettings::default(), yesterday, today);
        assert_eq!(past.day(), yesterday);
        assert!(!past.is_polling());
        assert!(past.viewing_history());

        let live = SessionState::starting_at(SessionSettings::default(), today, today);
        assert!(live.is_polling());
        assert!(!live.viewing_history());
    }

    #[test]
    fn alerts_are_newest_first_with_unique_ids() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).expect("date");
        let mut state = SessionState::new(SessionSettings::default(), today);
        state.push_alert("one".to_string());
        state.push_alert("two".to_string());
        let messages: Vec<_> = state.alerts().iter().map(|a| a.message.as_str()).collect();
        assert_eq!(messages, vec!["two", "one"]);
        assert_ne!(state.alerts()[0].id, state.alerts()[1].id);
    }

    #[test]
    fn polling_label_follows_flag() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).expect("date");
        let mut state = SessionState::new(SessionSettings::default(), today);
        assert_eq!(state.polling_label(), "Stop");
        state.polling = false;
        assert_eq!(state.polling_label(), "Continue");
    }
}
