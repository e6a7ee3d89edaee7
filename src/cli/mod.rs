//! CLI command handlers.
//!
//! Testable command handlers invoked by main.rs. Handlers return the desired
//! process exit code instead of exiting themselves.

mod score;

pub use score::run_score;

// Re-export config types used by handlers
pub use crate::config::ScoreConfig;
