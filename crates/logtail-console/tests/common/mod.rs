/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared fixtures for console integration tests
[POS]:    Test infrastructure - shared across console test modules
[UPDATE]: When adding new test patterns or fixtures
*/

#![allow(dead_code)]

use serde_json::{Value, json};
use wiremock::MockServer;

pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// A `logs.js` reply; each entry is `(id, type, message)`.
pub fn logs_page(entries: &[(i64, &str, &str)]) -> Value {
    let messages = entries
        .iter()
        .map(|(id, kind, message)| {
            json!({
                "id": id,
                "date": "15/10/2026 08:30:00",
                "message": message,
                "type": kind,
            })
        })
        .collect::<Vec<_>>();
    json!({ "success": true, "messages": messages })
}

pub fn history_page(records: &[(i64, &str)]) -> Value {
    let records = records
        .iter()
        .map(|(id, cmd)| json!({ "id": id, "cmd": cmd }))
        .collect::<Vec<_>>();
    json!({ "records": records })
}
