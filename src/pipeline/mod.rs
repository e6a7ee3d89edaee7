//! Pipeline orchestration for corpus scoring.
//!
//! Shared logic for the read → score → report workflow so the CLI handlers
//! stay thin: corpus input and validation, parallel per-sentence scoring, and
//! report rendering/output.

mod input;
mod output;
mod report;
mod score_stage;

pub use input::{read_corpus, tokenize, Corpus};
pub use output::{write_output, OutputTarget};
pub use report::{CorpusReport, ReportFormat};
pub use score_stage::score_corpus;

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success - corpus scored and reported
    pub const SUCCESS: i32 = 0;
    /// The hypothesis and reference files do not line up
    pub const INPUT_MISMATCH: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 2;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_values() {
        assert_eq!(exit_codes::SUCCESS, 0);
        assert_eq!(exit_codes::INPUT_MISMATCH, 1);
        assert_eq!(exit_codes::ERROR, 2);
    }
}
