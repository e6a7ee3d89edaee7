//! **CharacTER: character-level translation edit rate.**
//!
//! `character-ter` scores machine-translation output against reference
//! translations with the CharacTER metric. For each hypothesis/reference
//! sentence pair it searches for a word-level reordering of the hypothesis
//! that minimizes the downstream edit distance, then reports the normalized
//! character-level edit cost — including a penalty for the reordering itself —
//! as a score in `[0, 1]`, where lower is better.
//!
//! ## How the metric works
//!
//! 1. **Shift search**: contiguous phrases of the hypothesis are greedily
//!    relocated to the positions their twins occupy in the reference, as long
//!    as each move strictly lowers the word-level edit distance
//!    ([`metric::shift_search`]). Candidate moves are proposed by an
//!    exhaustive identical-phrase matcher ([`metric::find_matches`]) and
//!    scored through a prefix-trie cache of DP rows
//!    ([`metric::CachedEditDistance`]), so candidates sharing a prefix with
//!    previously scored ones avoid recomputing the full table.
//! 2. **Shift cost**: the applied reordering is priced as the mean character
//!    length of each displaced phrase ([`metric::shift_cost`]).
//! 3. **Character edit rate**: the character-level Levenshtein distance
//!    between the reordered hypothesis and the reference, plus the shift
//!    cost, divided by the hypothesis character length and clamped to 1.0
//!    ([`metric::sentence_score`]).
//!
//! ## Library usage
//!
//! ```
//! use character_ter::config::ScoringConfig;
//! use character_ter::metric::sentence_score;
//!
//! let hyp = ["this", "week", "the", "saudis", "denied", "that"];
//! let reference = ["saudi", "arabia", "denied", "this", "week", "that"];
//! let score = sentence_score(&hyp, &reference, &ScoringConfig::default());
//! assert!((0.0..=1.0).contains(&score));
//! ```
//!
//! Corpus-level scoring (files, rayon parallelism, aggregate statistics) lives
//! in [`pipeline`]; the `character-ter` binary is a thin clap wrapper over the
//! handlers in [`cli`].

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Cast safety: usize→f64 casts are pervasive in the score arithmetic and
    // all values are bounded by sentence lengths in practice
    clippy::cast_precision_loss
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod metric;
pub mod pipeline;

// Re-export main types for convenience
pub use config::{BehaviorConfig, OutputConfig, ScoreConfig, ScorePaths, ScoringConfig};
pub use error::{CharacterError, Result};
pub use metric::{
    char_edit_distance, edit_distance, sentence_score, CachedEditDistance, PhraseMatch,
};
pub use pipeline::{CorpusReport, ReportFormat};
