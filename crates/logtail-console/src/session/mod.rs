/*
[INPUT]:  Console messages (timer, user actions, request completions)
[OUTPUT]: Session state and effect commands, free of I/O
[POS]:    Session core module root
[UPDATE]: When adding session submodules or exports
*/

pub mod history;
pub mod state;
pub mod table;
pub mod update;

pub use history::{CommandHistory, Recall};
pub use state::{Alert, FailureKind, RequestFailure, SessionSettings, SessionState};
pub use table::{LogRow, LogTable, RowStyle};
pub use update::{Command, LogRequest, Msg, update};
