/*
[INPUT]:  Backend schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for backend communication
[UPDATE]: When the backend schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::models::{CommandRecord, LogEntry};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogsResponse {
    pub success: bool,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub messages: Vec<LogEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandListResponse {
    #[serde(default)]
    pub records: Vec<CommandRecord>,
}

/// Shape shared by `clear_logs.js` and `execute_cmd.js`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub success: bool,
    #[serde(default)]
    pub msg: Option<String>,
}
