/*
[INPUT]:  Backend schema definitions and serde requirements
[OUTPUT]: Typed query-string structs for backend requests
[POS]:    Data layer - type definitions for backend communication
[UPDATE]: When endpoint parameters change
*/

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use super::enums::LogLevel;

/// Query for `logs.js`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogsQuery {
    pub log: LogLevel,
    #[serde(rename = "startid")]
    pub start_id: i64,
    #[serde(serialize_with = "iso_day")]
    pub day: NaiveDate,
}

/// Query for `clear_logs.js`. The server removes entries with id below `id`
/// for the given level; `0` clears everything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClearLogsQuery {
    #[serde(rename = "type")]
    pub level: LogLevel,
    pub id: i64,
}

impl ClearLogsQuery {
    pub fn all(level: LogLevel) -> Self {
        Self { level, id: 0 }
    }
}

/// Query for `script/execute_cmd.js`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecuteCommandQuery {
    pub cmd: String,
}

fn iso_day<S>(day: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&day.format("%Y-%m-%d"))
}
