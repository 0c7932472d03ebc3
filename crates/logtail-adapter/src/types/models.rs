/*
[INPUT]:  Backend schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for backend communication
[UPDATE]: When the backend schema changes or new types added
[UPDATE]: Accept command record ids sent as strings
*/

use serde::{Deserialize, Deserializer, Serialize};

use super::enums::Severity;

/// One line of the server log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: i64,
    /// Preformatted by the server (`dd/MM/yyyy hh:mm:ss`).
    pub date: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: Severity,
}

/// A previously executed script command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    #[serde(deserialize_with = "lenient_id")]
    pub id: i64,
    pub cmd: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

fn lenient_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawId::deserialize(deserializer)? {
        RawId::Number(value) => Ok(value),
        RawId::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_record_accepts_string_and_number_ids() {
        let records: Vec<CommandRecord> =
            serde_json::from_str(r#"[{"id": 3, "cmd": "a"}, {"id": "12", "cmd": "b"}]"#)
                .expect("parse records");
        assert_eq!(records[0].id, 3);
        assert_eq!(records[1].id, 12);
    }

    #[test]
    fn command_record_rejects_non_numeric_id() {
        let parsed = serde_json::from_str::<CommandRecord>(r#"{"id": "abc", "cmd": "a"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn log_entry_reads_type_field() {
        let entry: LogEntry = serde_json::from_str(
            r#"{"id": 7, "date": "16/10/2026 10:00:00", "message": "boiler on", "type": "warning"}"#,
        )
        .expect("parse entry");
        assert_eq!(entry.kind, Severity::Warning);
        assert_eq!(entry.message, "boiler on");
    }
}
