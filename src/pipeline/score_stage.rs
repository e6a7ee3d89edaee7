//! Parallel corpus scoring.

use crate::config::ScoringConfig;
use crate::metric::sentence_score;
use crate::pipeline::input::{tokenize, Corpus};
use rayon::prelude::*;

/// Score every sentence pair of the corpus, in line order.
///
/// Sentence pairs are fully independent — each gets its own evaluator and
/// cache — so the corpus is the natural parallelism unit and the pairs are
/// scored on the rayon thread pool.
#[must_use]
pub fn score_corpus(corpus: &Corpus, config: &ScoringConfig) -> Vec<f64> {
    corpus
        .hypotheses
        .par_iter()
        .zip(corpus.references.par_iter())
        .map(|(hypothesis, reference)| {
            let hyp_words = tokenize(hypothesis);
            let ref_words = tokenize(reference);
            sentence_score(&hyp_words, &ref_words, config)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(pairs: &[(&str, &str)]) -> Corpus {
        Corpus {
            hypotheses: pairs.iter().map(|(h, _)| (*h).to_owned()).collect(),
            references: pairs.iter().map(|(_, r)| (*r).to_owned()).collect(),
        }
    }

    #[test]
    fn test_scores_keep_line_order() {
        let corpus = corpus(&[
            ("a b c", "a b c"),
            ("", "a b"),
            ("x y", "z w"),
        ]);
        let scores = score_corpus(&corpus, &ScoringConfig::default());
        assert_eq!(scores.len(), 3);
        assert_eq!(scores[0], 0.0);
        assert_eq!(scores[1], 1.0);
        assert!((scores[2] - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let corpus = corpus(&[
            ("the cat sat on the mat", "on the mat the cat sat"),
            ("b c a", "a b c"),
            ("ein kleiner test", "ein test kleiner"),
        ]);
        let config = ScoringConfig::default();

        let parallel = score_corpus(&corpus, &config);
        let sequential: Vec<f64> = corpus
            .hypotheses
            .iter()
            .zip(&corpus.references)
            .map(|(h, r)| sentence_score(&tokenize(h), &tokenize(r), &config))
            .collect();
        assert_eq!(parallel, sequential);
    }
}
