//! Score command handler.
//!
//! Implements the `score` subcommand: read a hypothesis/reference file pair,
//! score every sentence, report the aggregate.

use crate::config::ScoreConfig;
use crate::error::CharacterError;
use crate::pipeline::{
    exit_codes, read_corpus, score_corpus, write_output, CorpusReport, OutputTarget,
};
use anyhow::Result;

/// Run the score command, returning the desired exit code.
///
/// An input shape problem (mismatched or empty corpus files) is reported to
/// the user and mapped to [`exit_codes::INPUT_MISMATCH`]; other failures
/// propagate as errors. The caller is responsible for calling
/// `std::process::exit()` with the returned code when it is non-zero.
pub fn run_score(config: ScoreConfig) -> Result<i32> {
    let corpus = match read_corpus(&config.paths.hypothesis, &config.paths.reference) {
        Ok(corpus) => corpus,
        Err(err @ CharacterError::Input { .. }) => {
            tracing::error!("{err:#}");
            return Ok(exit_codes::INPUT_MISMATCH);
        }
        Err(err) => return Err(err.into()),
    };

    if !config.behavior.quiet {
        tracing::info!(sentences = corpus.len(), "scoring corpus");
    }

    let scores = score_corpus(&corpus, &config.scoring);

    if config.behavior.per_sentence {
        for (index, score) in scores.iter().enumerate() {
            println!("CharacTER of sentence {} is {score:.4}", index + 1);
        }
    }

    let report = CorpusReport::from_scores(scores)?;
    let rendered = report.render(config.output.format)?;

    let target = OutputTarget::from_option(config.output.file.clone());
    write_output(&rendered, &target)?;

    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BehaviorConfig, OutputConfig, ScorePaths, ScoringConfig};
    use crate::pipeline::ReportFormat;
    use std::io::Write;
    use std::path::Path;

    fn temp_file(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).expect("create temp file");
        file.write_all(content.as_bytes()).expect("write temp file");
        path
    }

    fn config(hyp: std::path::PathBuf, reference: std::path::PathBuf) -> ScoreConfig {
        ScoreConfig {
            paths: ScorePaths {
                hypothesis: hyp,
                reference,
            },
            scoring: ScoringConfig::default(),
            output: OutputConfig {
                format: ReportFormat::Json,
                file: None,
            },
            behavior: BehaviorConfig {
                per_sentence: false,
                quiet: true,
            },
        }
    }

    #[test]
    fn test_run_score_succeeds_on_valid_pair() {
        let dir = tempfile::tempdir().expect("tempdir");
        let hyp = temp_file(dir.path(), "hyp.txt", "a b c\n");
        let reference = temp_file(dir.path(), "ref.txt", "a b c\n");

        let mut cfg = config(hyp, reference);
        cfg.output.file = Some(dir.path().join("report.json"));

        let code = run_score(cfg.clone()).expect("handler runs");
        assert_eq!(code, exit_codes::SUCCESS);

        let report = std::fs::read_to_string(cfg.output.file.expect("set above"))
            .expect("report written");
        let value: serde_json::Value = serde_json::from_str(&report).expect("valid json");
        assert_eq!(value["mean"].as_f64(), Some(0.0));
    }

    #[test]
    fn test_run_score_maps_mismatch_to_exit_code() {
        let dir = tempfile::tempdir().expect("tempdir");
        let hyp = temp_file(dir.path(), "hyp.txt", "one\ntwo\n");
        let reference = temp_file(dir.path(), "ref.txt", "one\n");

        let code = run_score(config(hyp, reference)).expect("handled, not an error");
        assert_eq!(code, exit_codes::INPUT_MISMATCH);
    }

    #[test]
    fn test_run_score_propagates_io_errors() {
        let dir = tempfile::tempdir().expect("tempdir");
        let reference = temp_file(dir.path(), "ref.txt", "one\n");

        let result = run_score(config(dir.path().join("missing.txt"), reference));
        assert!(result.is_err());
    }
}
