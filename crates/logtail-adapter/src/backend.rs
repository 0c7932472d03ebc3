/*
[INPUT]:  Typed backend queries
[OUTPUT]: Async trait abstracting the console backend
[POS]:    Backend seam - lets callers swap the HTTP client for a fake
[UPDATE]: When adding endpoints the session layer needs
*/

use async_trait::async_trait;

use crate::http::{ConsoleClient, Result};
use crate::types::{ClearLogsQuery, CommandRecord, LogEntry, LogsQuery};

/// Operations the console session performs against the server.
#[async_trait]
pub trait ConsoleBackend: Send + Sync {
    /// Fetch log entries newer than the watermark in `query`
    async fn fetch_logs(&self, query: &LogsQuery) -> Result<Vec<LogEntry>>;

    /// List executed commands
    async fn command_list(&self) -> Result<Vec<CommandRecord>>;

    /// Execute one command, returning its output
    async fn execute_command(&self, cmd: &str) -> Result<String>;

    /// Remove server log entries
    async fn clear_logs(&self, query: &ClearLogsQuery) -> Result<()>;
}

#[async_trait]
impl ConsoleBackend for ConsoleClient {
    async fn fetch_logs(&self, query: &LogsQuery) -> Result<Vec<LogEntry>> {
        ConsoleClient::fetch_logs(self, query).await
    }

    async fn command_list(&self) -> Result<Vec<CommandRecord>> {
        ConsoleClient::command_list(self).await
    }

    async fn execute_command(&self, cmd: &str) -> Result<String> {
        ConsoleClient::execute_command(self, cmd).await
    }

    async fn clear_logs(&self, query: &ClearLogsQuery) -> Result<()> {
        ConsoleClient::clear_logs(self, query).await
    }
}
