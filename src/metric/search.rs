//! Greedy phrase-shift search.
//!
//! Repeatedly relocates one contiguous span of hypothesis words to the
//! position its twin occupies in the reference, keeping the shift that lowers
//! the word-level edit distance the most, until no shift improves it.

use crate::config::ScoringConfig;
use crate::metric::cache::CachedEditDistance;
use crate::metric::phrases::{find_matches, PhraseMatch};

/// Result of the shift search for one sentence pair.
#[derive(Debug, Clone)]
pub struct SearchOutcome<'a> {
    /// The reordered hypothesis after all applied shifts.
    pub words: Vec<&'a str>,
    /// Word-level edit distance of `words` against the reference.
    pub score: usize,
    /// Number of shifts actually applied.
    pub shifts_applied: usize,
}

/// Run the greedy shift search for `hypothesis` against the evaluator's
/// reference.
///
/// Each round scores every candidate shift through the cached evaluator and
/// applies the one with the strictly greatest gain; on tied gains the first
/// candidate in phrase-enumeration order wins, which makes the search
/// deterministic. The loop ends when no candidate improves the score, or when
/// `config.max_shift_iterations` rounds have been applied.
///
/// Termination is guaranteed even without the cap: every applied shift
/// strictly decreases a non-negative integer score.
pub fn shift_search<'a>(
    hypothesis: &[&'a str],
    evaluator: &mut CachedEditDistance<'a>,
    config: &ScoringConfig,
) -> SearchOutcome<'a> {
    let reference = evaluator.reference();
    let mut words: Vec<&'a str> = hypothesis.to_vec();
    let mut score = evaluator.evaluate(&words);
    let mut shifts_applied = 0;

    while score > 0 {
        if config
            .max_shift_iterations
            .is_some_and(|cap| shifts_applied >= cap)
        {
            tracing::debug!(
                cap = config.max_shift_iterations,
                "shift iteration cap reached, stopping search early"
            );
            break;
        }

        let mut best: Option<(usize, Vec<&'a str>)> = None;

        for candidate_shift in find_matches(&words, reference) {
            let candidate = apply_shift(&words, &candidate_shift);
            let candidate_score = evaluator.evaluate(&candidate);

            if candidate_score >= score {
                continue;
            }
            let gain = score - candidate_score;
            // Strict comparison keeps the earliest candidate on ties.
            if best.as_ref().map_or(true, |(best_gain, _)| gain > *best_gain) {
                best = Some((gain, candidate));
            }
        }

        let Some((gain, shifted)) = best else {
            break;
        };

        words = shifted;
        score -= gain;
        shifts_applied += 1;
    }

    SearchOutcome {
        words,
        score,
        shifts_applied,
    }
}

/// Build the hypothesis that results from applying one shift: the span is
/// removed first, then reinserted at `start_2` of the shortened sequence. An
/// insertion point past the shortened end appends at the tail.
fn apply_shift<'a>(words: &[&'a str], shift: &PhraseMatch) -> Vec<&'a str> {
    let span = &words[shift.start_1..shift.start_1 + shift.length];

    let mut shifted: Vec<&'a str> = Vec::with_capacity(words.len());
    shifted.extend_from_slice(&words[..shift.start_1]);
    shifted.extend_from_slice(&words[shift.start_1 + shift.length..]);

    let insert_at = shift.start_2.min(shifted.len());
    shifted.splice(insert_at..insert_at, span.iter().copied());
    shifted
}
