/*
[INPUT]:  Error sources (HTTP transport, status codes, decoding, backend rejections)
[OUTPUT]: Structured error type split into transport and logical failures
[POS]:    Error handling layer - unified error type for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the console adapter
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// HTTP request failed (connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("HTTP status {code}: {body}")]
    Status { code: u16, body: String },

    /// Response body could not be decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Backend reported `success: false`
    #[error("{message}")]
    Rejected { message: String },
}

impl ConsoleError {
    /// Network, HTTP or decoding failure, as opposed to a backend rejection.
    pub fn is_transport(&self) -> bool {
        !matches!(self, ConsoleError::Rejected { .. })
    }

    /// Check if the error is a request timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, ConsoleError::Http(err) if err.is_timeout())
    }

    /// Text shown to the user in an alert banner.
    pub fn alert_text(&self) -> String {
        match self {
            ConsoleError::Rejected { message } => message.clone(),
            other => format!("Request Failed: {other}"),
        }
    }

    /// Create a status error from a response code and body
    pub fn status_error(status: StatusCode, body: impl Into<String>) -> Self {
        ConsoleError::Status {
            code: status.as_u16(),
            body: body.into(),
        }
    }

    /// Create a rejection from the optional `msg` of a backend reply
    pub fn rejected(msg: Option<String>) -> Self {
        ConsoleError::Rejected {
            message: msg
                .filter(|text| !text.trim().is_empty())
                .unwrap_or_else(|| "request rejected by server".to_string()),
        }
    }
}

/// Result type alias for console adapter operations
pub type Result<T> = std::result::Result<T, ConsoleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_is_not_transport() {
        let err = ConsoleError::rejected(Some("You are not logged.".to_string()));
        assert!(!err.is_transport());
        assert_eq!(err.alert_text(), "You are not logged.");
    }

    #[test]
    fn test_rejection_without_message_gets_generic_text() {
        let err = ConsoleError::rejected(Some("  ".to_string()));
        assert_eq!(err.alert_text(), "request rejected by server");
        assert_eq!(ConsoleError::rejected(None).alert_text(), "request rejected by server");
    }

    #[test]
    fn test_status_error_creation() {
        let err = ConsoleError::status_error(StatusCode::BAD_GATEWAY, "upstream down");
        assert!(err.is_transport());
        match &err {
            ConsoleError::Status { code, body } => {
                assert_eq!(*code, 502);
                assert_eq!(body, "upstream down");
            }
            _ => panic!("Expected Status error variant"),
        }
        assert_eq!(err.alert_text(), "Request Failed: HTTP status 502: upstream down");
    }
}
