//! Identical-phrase discovery between two word sequences.
//!
//! The shift search needs candidate spans to relocate, and the shift-cost
//! estimator needs matched runs to price. Both come from the same primitive:
//! enumerate every pair of positions holding the same word at different
//! indices and extend the match greedily forward.

/// A run of identical words starting at different positions in two sequences.
///
/// `start_1`/`start_2` index into the first and second sequence respectively;
/// `length` words match from there on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhraseMatch {
    pub start_1: usize,
    pub start_2: usize,
    pub length: usize,
}

/// Find all identical phrases between `seq_1` and `seq_2`.
///
/// For every position pair `(i, j)` with `i != j` and `seq_1[i] == seq_2[j]`,
/// yields the maximal run starting there. Matches are yielded in cartesian
/// order of `(i, j)`. The enumeration is deliberately exhaustive: runs
/// starting inside other runs are reported too, mirroring the TER-family
/// candidate generation policy rather than a minimal-cover matching.
#[must_use]
pub fn find_matches(seq_1: &[&str], seq_2: &[&str]) -> Vec<PhraseMatch> {
    let mut matches = Vec::new();

    for start_1 in 0..seq_1.len() {
        for start_2 in 0..seq_2.len() {
            // A word already in place needs no shift.
            if start_1 == start_2 || seq_1[start_1] != seq_2[start_2] {
                continue;
            }

            let mut length = 1;
            for step in 1..seq_1.len() - start_1 {
                let (end_1, end_2) = (start_1 + step, start_2 + step);
                if end_2 < seq_2.len() && seq_1[end_1] == seq_2[end_2] {
                    length += 1;
                } else {
                    break;
                }
            }

            matches.push(PhraseMatch {
                start_1,
                start_2,
                length,
            });
        }
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_common_words() {
        let matches = find_matches(&["x", "y"], &["z", "w"]);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_same_position_is_skipped() {
        // "a" sits at index 0 in both sequences: not a shift candidate.
        let matches = find_matches(&["a", "b"], &["a", "c"]);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_single_displaced_word() {
        let matches = find_matches(&["b", "c", "a"], &["a", "b", "c"]);
        assert_eq!(
            matches,
            vec![
                PhraseMatch { start_1: 0, start_2: 1, length: 2 },
                PhraseMatch { start_1: 1, start_2: 2, length: 1 },
                PhraseMatch { start_1: 2, start_2: 0, length: 1 },
            ]
        );
    }

    #[test]
    fn test_runs_extend_greedily() {
        let matches = find_matches(&["x", "a", "b", "c"], &["a", "b", "c", "x"]);
        // The run starting at (1, 0) covers "a b c" in one match.
        assert!(matches.contains(&PhraseMatch { start_1: 1, start_2: 0, length: 3 }));
        // Sub-runs are reported as well.
        assert!(matches.contains(&PhraseMatch { start_1: 2, start_2: 1, length: 2 }));
        assert!(matches.contains(&PhraseMatch { start_1: 3, start_2: 2, length: 1 }));
    }

    #[test]
    fn test_extension_bounded_by_second_sequence() {
        let matches = find_matches(&["a", "b"], &["x", "a"]);
        assert_eq!(
            matches,
            vec![PhraseMatch { start_1: 0, start_2: 1, length: 1 }]
        );
    }

    #[test]
    fn test_cartesian_order() {
        let matches = find_matches(&["a", "a"], &["a", "a", "a"]);
        let starts: Vec<(usize, usize)> =
            matches.iter().map(|m| (m.start_1, m.start_2)).collect();
        assert_eq!(starts, vec![(0, 1), (0, 2), (1, 0), (1, 2)]);
    }
}
