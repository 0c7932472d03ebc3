/*
[INPUT]:  HTTP client configuration and backend endpoints
[OUTPUT]: HTTP responses and typed backend results
[POS]:    HTTP layer - JSON-over-HTTP communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod logs;
pub mod script;

pub use error::{ConsoleError, Result};

pub use client::{ClientConfig, ConsoleClient, DEFAULT_BASE_URL, normalize_base_url};
