//! The CharacTER metric core.
//!
//! CharacTER is a character-level translation edit rate: the hypothesis is
//! first reordered at the word level to minimize its edit distance from the
//! reference (TER-style phrase shifting), then the character-level edit
//! distance between the reordered hypothesis and the reference — plus a
//! penalty for the reordering itself — is normalized by the hypothesis
//! character length.
//!
//! [`sentence_score`] is the entry point for one already-tokenized sentence
//! pair; the [`crate::pipeline`] module handles files and corpora.

mod cache;
mod distance;
mod phrases;
mod search;
mod shift_cost;

pub use cache::CachedEditDistance;
pub use distance::{char_edit_distance, edit_distance};
pub use phrases::{find_matches, PhraseMatch};
pub use search::{shift_search, SearchOutcome};
pub use shift_cost::shift_cost;

use crate::config::ScoringConfig;

/// Compute the CharacTER score of one hypothesis/reference sentence pair.
///
/// Both arguments are whitespace-tokenized word sequences; tokenization is the
/// caller's responsibility. The result is in `[0.0, 1.0]`, where 0.0 is a
/// perfect match and 1.0 maximal error.
///
/// Degenerate inputs are defined, not errors: a hypothesis matching the
/// reference word-for-word scores 0.0 without running the search, and an empty
/// hypothesis against a non-empty reference scores 1.0.
#[must_use]
pub fn sentence_score(hypothesis: &[&str], reference: &[&str], config: &ScoringConfig) -> f64 {
    let mut evaluator = CachedEditDistance::new(reference);
    let outcome = shift_search(hypothesis, &mut evaluator, config);

    // Word-perfect hypothesis: nothing to edit, nothing to shift.
    if outcome.score == 0 && outcome.shifts_applied == 0 {
        return 0.0;
    }

    let joined_hyp = outcome.words.join(" ");
    if joined_hyp.is_empty() {
        return 1.0;
    }
    let joined_ref = reference.join(" ");

    let shift_penalty = shift_cost(&outcome.words, hypothesis);
    let edit_cost = char_edit_distance(&joined_hyp, &joined_ref) as f64 + shift_penalty;

    let hyp_chars = joined_hyp.chars().count();
    (edit_cost / hyp_chars as f64).min(1.0)
}
