//! Configuration types for scoring operations.
//!
//! Structured configuration consumed by the CLI handlers and the corpus
//! pipeline. Grouped per concern so handlers only take what they use.

use crate::pipeline::ReportFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Knobs for the metric core itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Maximum number of shifts applied per sentence.
    ///
    /// The search always terminates on its own (each shift strictly lowers a
    /// non-negative integer score), but pathological sentences can take many
    /// rounds of O(n·m) candidate generation; a cap bounds the worst case.
    /// `None` reproduces the reference metric exactly.
    pub max_shift_iterations: Option<usize>,
}

/// Input files for one scoring run.
#[derive(Debug, Clone)]
pub struct ScorePaths {
    /// Hypothesis file, one sentence per line.
    pub hypothesis: PathBuf,
    /// Reference file, one sentence per line.
    pub reference: PathBuf,
}

/// Where and how results are written.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Report format (text prints the corpus mean, json the full report).
    pub format: ReportFormat,
    /// Output file path (stdout if not specified).
    pub file: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Text,
            file: None,
        }
    }
}

/// Behavior flags shared across commands.
#[derive(Debug, Clone, Default)]
pub struct BehaviorConfig {
    /// Print the score of every sentence, not just the corpus mean.
    pub per_sentence: bool,
    /// Suppress non-essential diagnostics.
    pub quiet: bool,
}

/// Full configuration of the `score` command.
#[derive(Debug, Clone)]
pub struct ScoreConfig {
    pub paths: ScorePaths,
    pub scoring: ScoringConfig,
    pub output: OutputConfig,
    pub behavior: BehaviorConfig,
}
