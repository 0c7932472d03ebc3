/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for logtail-adapter tests

use chrono::NaiveDate;
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Fixed calendar day used by log queries
pub fn test_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).expect("valid date")
}

/// A `logs.js` reply carrying `ids` as normal entries
pub fn logs_page(ids: &[i64]) -> serde_json::Value {
    let messages = ids
        .iter()
        .map(|id| {
            serde_json::json!({
                "id": id,
                "date": "16/10/2026 12:00:00",
                "message": format!("entry {id}"),
                "type": "debug",
            })
        })
        .collect::<Vec<_>>();
    serde_json::json!({ "success": true, "messages": messages })
}
