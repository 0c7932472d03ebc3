/*
[INPUT]:  Log level, watermark and calendar day
[OUTPUT]: New log entries; server-side log clearing
[POS]:    HTTP layer - log endpoints
[UPDATE]: When changing log query parameters or response format
*/

use crate::http::{ConsoleClient, ConsoleError, Result};
use crate::types::{ClearLogsQuery, LogEntry, LogsQuery, LogsResponse, StatusResponse};

const LOGS_ENDPOINT: &str = "logs.js";
const CLEAR_LOGS_ENDPOINT: &str = "clear_logs.js";

impl ConsoleClient {
    /// Fetch log entries with id >= `start_id` for one day
    ///
    /// GET logs.js?log={level}&startid={start_id}&day={YYYY-MM-DD}
    pub async fn fetch_logs(&self, query: &LogsQuery) -> Result<Vec<LogEntry>> {
        let builder = self.get(LOGS_ENDPOINT)?.query(query);
        let response: LogsResponse = self.send_json(builder).await?;
        if !response.success {
            return Err(ConsoleError::rejected(response.msg));
        }
        tracing::debug!(
            start_id = query.start_id,
            day = %query.day,
            count = response.messages.len(),
            "fetched log page"
        );
        Ok(response.messages)
    }

    /// Remove server log entries
    ///
    /// GET clear_logs.js?type={level}&id={id}
    pub async fn clear_logs(&self, query: &ClearLogsQuery) -> Result<()> {
        let builder = self.get(CLEAR_LOGS_ENDPOINT)?.query(query);
        let response: StatusResponse = self.send_json(builder).await?;
        if !response.success {
            return Err(ConsoleError::rejected(response.msg));
        }
        Ok(())
    }
}
