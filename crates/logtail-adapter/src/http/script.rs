/*
[INPUT]:  Script command text
[OUTPUT]: Command history records and command output
[POS]:    HTTP layer - script console endpoints
[UPDATE]: When changing script endpoints or response format
*/

use crate::http::{ConsoleClient, ConsoleError, Result};
use crate::types::{CommandListResponse, CommandRecord, ExecuteCommandQuery, StatusResponse};

const COMMAND_LIST_ENDPOINT: &str = "script/cmd_list.js";
const EXECUTE_COMMAND_ENDPOINT: &str = "script/execute_cmd.js";

impl ConsoleClient {
    /// List previously executed commands, in server order
    ///
    /// GET script/cmd_list.js
    pub async fn command_list(&self) -> Result<Vec<CommandRecord>> {
        let builder = self.get(COMMAND_LIST_ENDPOINT)?;
        let response: CommandListResponse = self.send_json(builder).await?;
        Ok(response.records)
    }

    /// Execute a script command and return its output
    ///
    /// GET script/execute_cmd.js?cmd={cmd}
    pub async fn execute_command(&self, cmd: &str) -> Result<String> {
        let query = ExecuteCommandQuery {
            cmd: cmd.to_string(),
        };
        let builder = self.get(EXECUTE_COMMAND_ENDPOINT)?.query(&query);
        let response: StatusResponse = self.send_json(builder).await?;
        if !response.success {
            return Err(ConsoleError::rejected(response.msg));
        }
        Ok(response.msg.unwrap_or_default())
    }
}
