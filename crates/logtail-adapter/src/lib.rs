/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public console adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod backend;
pub mod http;
pub mod types;

pub use backend::ConsoleBackend;

// Re-export commonly used types from http
pub use http::{ClientConfig, ConsoleClient, ConsoleError, DEFAULT_BASE_URL, Result};

// Re-export all types
pub use types::*;
