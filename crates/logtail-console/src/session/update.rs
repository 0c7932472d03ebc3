/*
[INPUT]:  SessionState and one message (user action, timer tick, request completion)
[OUTPUT]: Mutated SessionState and the commands the runtime must execute
[POS]:    Session core - pure state transitions, no I/O
[UPDATE]: When adding user actions or backend calls
*/

use chrono::NaiveDate;
use logtail_adapter::{ClearLogsQuery, CommandRecord, LogEntry, LogsQuery};
use tracing::{debug, warn};

use super::history::Recall;
use super::state::{RequestFailure, SessionState};
use super::table::LogRow;

/// A log fetch tagged with the day session it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRequest {
    pub epoch: u64,
    pub query: LogsQuery,
}

/// Side effects requested by [`update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    FetchLogs(LogRequest),
    /// Abort any log fetch still in flight
    CancelLogs,
    FetchHistory,
    Execute(String),
    ClearLogs(ClearLogsQuery),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Session opened: first poll and history load
    Start,
    /// Periodic poll timer
    Tick,
    Poll {
        force: bool,
    },
    LogsLoaded {
        epoch: u64,
        outcome: Result<Vec<LogEntry>, RequestFailure>,
    },
    OlderDay,
    NewerDay {
        today: NaiveDate,
    },
    TogglePolling,
    ClearLogs,
    LogsCleared(Result<(), RequestFailure>),
    RefreshHistory,
    HistoryLoaded(Result<Vec<CommandRecord>, RequestFailure>),
    HistoryOlder,
    HistoryNewer,
    InputChanged(String),
    Submit(String),
    CommandExecuted(Result<String, RequestFailure>),
    SearchChanged(String),
    ClearSearch,
    ClearInput,
    WrapBoardCommand,
    DismissAlert(u64),
}

/// Apply one message to the session and return the effects to run.
pub fn update(state: &mut SessionState, msg: Msg) -> Vec<Command> {
    match msg {
        Msg::Start => {
            let mut commands = poll(state, false);
            commands.push(Command::FetchHistory);
            commands
        }
        Msg::Tick => poll(state, false),
        Msg::Poll { force } => poll(state, force),
        Msg::LogsLoaded { epoch, outcome } => {
            logs_loaded(state, epoch, outcome);
            Vec::new()
        }
        Msg::OlderDay => {
            let Some(day) = state.day.pred_opt() else {
                return Vec::new();
            };
            let mut commands = switch_day(state, day);
            state.viewing_history = true;
            state.polling = false;
            commands.extend(poll(state, true));
            commands
        }
        Msg::NewerDay { today } => {
            if state.day >= today {
                return Vec::new();
            }
            let Some(day) = state.day.succ_opt() else {
                return Vec::new();
            };
            let mut commands = switch_day(state, day);
            commands.extend(poll(state, true));
            if day == today {
                state.viewing_history = false;
                state.polling = true;
            }
            commands
        }
        Msg::TogglePolling => {
            state.polling = !state.polling;
            debug!(polling = state.polling, "polling toggled");
            Vec::new()
        }
        Msg::ClearLogs => {
            state.table.clear();
            vec![Command::ClearLogs(ClearLogsQuery::all(state.settings.clear_level))]
        }
        Msg::LogsCleared(result) => {
            if let Err(failure) = result {
                state.push_alert(failure.alert_text());
            }
            Vec::new()
        }
        Msg::RefreshHistory => vec![Command::FetchHistory],
        Msg::HistoryLoaded(result) => {
            match result {
                Ok(records) => state.history.replace(records),
                Err(failure) => state.push_alert(failure.alert_text()),
            }
            Vec::new()
        }
        Msg::HistoryOlder => {
            let recall = state.history.older();
            apply_recall(&mut state.command_input, recall);
            Vec::new()
        }
        Msg::HistoryNewer => {
            let recall = state.history.newer();
            apply_recall(&mut state.command_input, recall);
            Vec::new()
        }
        Msg::InputChanged(text) => {
            state.command_input = text;
            Vec::new()
        }
        Msg::Submit(cmd) => {
            state.table.prepend(LogRow::echo(&cmd));
            state.command_input = cmd.clone();
            vec![Command::Execute(cmd)]
        }
        Msg::CommandExecuted(result) => match result {
            Ok(output) => {
                state.command_input = output;
                vec![Command::FetchHistory]
            }
            Err(failure) => {
                state.push_alert(failure.alert_text());
                Vec::new()
            }
        },
        Msg::SearchChanged(query) => {
            state.search = query;
            state.table.apply_filter(&state.search);
            Vec::new()
        }
        Msg::ClearSearch => {
            state.search.clear();
            state.table.apply_filter("");
            Vec::new()
        }
        Msg::ClearInput => {
            state.command_input.clear();
            state.history.reset_cursor();
            Vec::new()
        }
        Msg::WrapBoardCommand => {
            state.command_input = format!("helper.sendCmd(\"{}\")", state.command_input);
            Vec::new()
        }
        Msg::DismissAlert(id) => {
            state.alerts.retain(|alert| alert.id != id);
            Vec::new()
        }
    }
}

fn poll(state: &mut SessionState, force: bool) -> Vec<Command> {
    if !state.polling && !force {
        return Vec::new();
    }
    if state.poll_pending() {
        debug!(epoch = state.epoch, "poll already in flight, skipping");
        return Vec::new();
    }
    state.pending_poll = Some(state.epoch);
    vec![Command::FetchLogs(LogRequest {
        epoch: state.epoch,
        query: LogsQuery {
            log: state.settings.log_level,
            start_id: state.last_log_id,
            day: state.day,
        },
    })]
}

/// Move the day cursor and start a new day session.
fn switch_day(state: &mut SessionState, day: NaiveDate) -> Vec<Command> {
    let cancel = state.pending_poll.is_some();
    state.day = day;
    state.epoch += 1;
    state.pending_poll = None;
    state.last_log_id = 0;
    state.table.show_loading();
    debug!(day = %day, epoch = state.epoch, "day cursor moved");
    if cancel {
        vec![Command::CancelLogs]
    } else {
        Vec::new()
    }
}

fn logs_loaded(
    state: &mut SessionState,
    epoch: u64,
    outcome: Result<Vec<LogEntry>, RequestFailure>,
) {
    if epoch != state.epoch {
        debug!(epoch, current = state.epoch, "dropping response for superseded day");
        return;
    }
    state.pending_poll = None;

    match outcome {
        Ok(entries) => {
            if state.last_log_id == 0 {
                state.table.clear();
            }
            for entry in &entries {
                state.table.prepend(LogRow::from_entry(entry));
                state.last_log_id = state.last_log_id.max(entry.id + 1);
            }
            state.table.apply_filter(&state.search);
        }
        Err(failure) => {
            warn!(error = %failure.message, "log poll failed; polling stopped");
            state.polling = false;
            state.push_alert(failure.alert_text());
        }
    }
}

fn apply_recall(input: &mut String, recall: Recall<'_>) {
    match recall {
        Recall::Entry(cmd) => *input = cmd.to_string(),
        Recall::Blank => input.clear(),
        Recall::Stay => {}
    }
}
