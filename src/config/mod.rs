//! Configuration module for character-ter.
//!
//! Provides type-safe configuration structures for the scoring commands,
//! with serde support for the parts that appear in JSON reports.

mod types;

pub use types::{BehaviorConfig, OutputConfig, ScoreConfig, ScorePaths, ScoringConfig};
