//! Utility modules for npm-start
//!
//! Currently holds the structured logging setup shared by hosts embedding the
//! detector.

pub mod logging;

// Re-export commonly used items
pub use logging::{init_default, init_from_env, init_logging, LoggingConfig};
