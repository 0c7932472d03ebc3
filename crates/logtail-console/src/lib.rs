/*
[INPUT]:  Public API exports for logtail-console crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod config;
pub mod controller;
pub mod dispatcher;
pub mod session;

// Re-export main types for convenience
pub use config::ConsoleConfig;
pub use controller::Controller;
pub use dispatcher::{Dispatcher, perform};
