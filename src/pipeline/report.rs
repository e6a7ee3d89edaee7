//! Corpus report: aggregate statistics and rendering.

use crate::error::{CharacterError, Result};
use serde::Serialize;

/// Output format for the scoring report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// Print the corpus mean, nothing else.
    Text,
    /// Full report: per-sentence scores plus summary statistics.
    Json,
}

/// Per-corpus scoring report.
#[derive(Debug, Clone, Serialize)]
pub struct CorpusReport {
    /// CharacTER score of each sentence pair, in line order.
    pub sentence_scores: Vec<f64>,
    /// Arithmetic mean of the sentence scores.
    pub mean: f64,
    /// Population variance of the sentence scores.
    pub variance: f64,
    /// Population standard deviation of the sentence scores.
    pub std_deviation: f64,
}

impl CorpusReport {
    /// Aggregate per-sentence scores into a report.
    pub fn from_scores(sentence_scores: Vec<f64>) -> Result<Self> {
        if sentence_scores.is_empty() {
            return Err(CharacterError::empty_corpus());
        }

        let count = sentence_scores.len() as f64;
        let mean = sentence_scores.iter().sum::<f64>() / count;
        let variance = sentence_scores
            .iter()
            .map(|score| (score - mean).powi(2))
            .sum::<f64>()
            / count;

        Ok(Self {
            sentence_scores,
            mean,
            variance,
            std_deviation: variance.sqrt(),
        })
    }

    /// Render the report in the requested format.
    ///
    /// The text format prints only the corpus mean, matching the established
    /// command-line behavior of the metric.
    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Text => Ok(format!("{:.4}\n", self.mean)),
            ReportFormat::Json => {
                let mut json = serde_json::to_string_pretty(self)?;
                json.push('\n');
                Ok(json)
            }
        }
    }
}
