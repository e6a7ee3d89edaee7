//! Levenshtein edit distance over generic sequences.
//!
//! Used in two places: word-level (inside the cached evaluator and the shift
//! search) and character-level (for the final score). Both go through the same
//! two-row dynamic program.

/// Compute the Levenshtein distance between two sequences.
///
/// Insertions, deletions and substitutions all cost 1. The computation keeps
/// only two DP rows and always iterates the shorter sequence in the inner
/// loop, so memory is O(min(|a|, |b|)). Ordering of the arguments does not
/// affect the result.
#[must_use]
pub fn edit_distance<T: Eq>(a: &[T], b: &[T]) -> usize {
    // Keep the shorter sequence on the row axis.
    let (longer, shorter) = if a.len() < b.len() { (b, a) } else { (a, b) };

    if shorter.is_empty() {
        return longer.len();
    }

    let mut previous: Vec<usize> = (0..=shorter.len()).collect();
    let mut current = vec![0usize; shorter.len() + 1];

    for (i, item_long) in longer.iter().enumerate() {
        current[0] = i + 1;

        for (j, item_short) in shorter.iter().enumerate() {
            let insertions = previous[j + 1] + 1;
            let deletions = current[j] + 1;
            let substitutions = previous[j] + usize::from(item_long != item_short);
            current[j + 1] = insertions.min(deletions).min(substitutions);
        }

        std::mem::swap(&mut previous, &mut current);
    }

    previous[shorter.len()]
}

/// Character-level edit distance between two strings.
///
/// Operates on Unicode scalar values, not bytes, so multi-byte characters
/// count as single edits.
#[must_use]
pub fn char_edit_distance(a: &str, b: &str) -> usize {
    let chars_a: Vec<char> = a.chars().collect();
    let chars_b: Vec<char> = b.chars().collect();
    edit_distance(&chars_a, &chars_b)
}
