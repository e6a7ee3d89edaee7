//! Shift-cost penalty.
//!
//! Reordering is not free: after the search converges, the final word order is
//! compared against the original hypothesis and every displaced run is charged
//! the mean character length of its words. This is a reproducible heuristic
//! inherited from the reference metric, not an exact accounting of the shifts
//! the search applied, and its cursor bookkeeping (see the inner loop) is
//! preserved bit-for-bit so scores stay comparable with the established
//! implementation.

/// Estimate how many characters were moved to turn `original` into `shifted`.
///
/// Both sequences hold the same words (shifting only reorders), so they have
/// equal length. A word sitting at the same index in both charges nothing.
/// Otherwise the first forward occurrence in `shifted` anchors a greedily
/// extended run, and the mean character count of the run's original words is
/// added to the cost. Note the cursor advances both inside the extension loop
/// and once per outer round; positions skipped that way are never charged.
#[must_use]
pub fn shift_cost(shifted: &[&str], original: &[&str]) -> f64 {
    debug_assert_eq!(
        shifted.len(),
        original.len(),
        "shifting must preserve the word count"
    );

    let mut cost = 0.0;
    let mut cursor = 0;

    while cursor < shifted.len() {
        if original[cursor] == shifted[cursor] {
            cursor += 1;
            continue;
        }

        let mut mean_moved_chars = 0.0;
        let anchor = cursor;

        for start in cursor + 1..shifted.len() {
            if original[anchor] != shifted[start] {
                continue;
            }

            let mut length = 1;
            for pos in 1..original.len() - anchor {
                let (original_end, shift_end) = (anchor + pos, start + pos);
                if shift_end < shifted.len() && original[original_end] == shifted[shift_end] {
                    length += 1;
                    // Matched pairs are consumed here as well as by the outer
                    // round below.
                    if cursor + 1 < original.len() {
                        cursor += 1;
                    }
                } else {
                    break;
                }
            }

            let moved_chars: usize = original[anchor..anchor + length]
                .iter()
                .map(|word| word.chars().count())
                .sum();
            mean_moved_chars = moved_chars as f64 / length as f64;
            break;
        }

        cost += mean_moved_chars;
        cursor += 1;
    }

    cost
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchanged_order_costs_nothing() {
        assert_eq!(shift_cost(&["a", "b", "c"], &["a", "b", "c"]), 0.0);
        assert_eq!(shift_cost(&[], &[]), 0.0);
    }

    #[test]
    fn test_undisplaced_duplicates_cost_nothing() {
        // "a" at index 0 matches in place; the later duplicate must not be
        // mistaken for a displacement.
        assert_eq!(shift_cost(&["a", "x", "a"], &["a", "x", "a"]), 0.0);
    }

    #[test]
    fn test_single_word_shift() {
        // original "b c a" became "a b c": the run "b c" moved, mean length 1.
        assert_eq!(shift_cost(&["a", "b", "c"], &["b", "c", "a"]), 1.0);
    }

    #[test]
    fn test_mean_uses_original_word_lengths() {
        // "bbbb c a" -> "a bbbb c": run "bbbb c" moved, mean (4 + 1) / 2.
        assert_eq!(shift_cost(&["a", "bbbb", "c"], &["bbbb", "c", "a"]), 2.5);
    }

    #[test]
    fn test_word_missing_ahead_charges_nothing() {
        // "a" only occurs before the cursor in the shifted order.
        assert_eq!(shift_cost(&["a", "b"], &["b", "a"]), 1.0);
    }

    #[test]
    fn test_multibyte_word_lengths() {
        // "日本語" counts 3 characters, not 9 bytes.
        assert_eq!(shift_cost(&["x", "日本語"], &["日本語", "x"]), 3.0);
    }
}
