//! Prefix-cached word-level edit distance.
//!
//! The shift search evaluates many candidate hypotheses against one fixed
//! reference, and consecutive candidates usually share a prefix (words before
//! the shift point are untouched). [`CachedEditDistance`] memoizes Levenshtein
//! DP rows in a trie keyed by hypothesis word prefixes, so evaluating a
//! candidate only runs the DP over the part of the sequence that has not been
//! seen before.

use std::collections::HashMap;

/// One node of the prefix trie. Owns its children exclusively; `row` is the
/// DP row for the word path from the root down to this node.
#[derive(Debug, Default)]
struct TrieNode<'a> {
    children: HashMap<&'a str, TrieNode<'a>>,
    row: Option<Vec<usize>>,
}

/// Word-level edit distance evaluator bound to one reference sentence.
///
/// The cache is valid only for the reference it was constructed with and is
/// meant to live for a single sentence's scoring: it grows monotonically and
/// is dropped when scoring completes.
///
/// A row stored at a trie node depends only on the word path leading to the
/// node, never on what follows, so it can be reused by any hypothesis sharing
/// that prefix. For the same reason the first row written for a prefix is
/// final and later writes are ignored.
#[derive(Debug)]
pub struct CachedEditDistance<'a> {
    reference: &'a [&'a str],
    root: TrieNode<'a>,
}

impl<'a> CachedEditDistance<'a> {
    /// Create an evaluator for the given reference word sequence.
    #[must_use]
    pub fn new(reference: &'a [&'a str]) -> Self {
        let root = TrieNode {
            children: HashMap::new(),
            // DP first row: distance of the empty hypothesis prefix to every
            // reference prefix.
            row: Some((0..=reference.len()).collect()),
        };
        Self { reference, root }
    }

    /// The reference this evaluator is bound to.
    #[must_use]
    pub fn reference(&self) -> &'a [&'a str] {
        self.reference
    }

    /// Word-level edit distance between `hypothesis` and the bound reference.
    ///
    /// Resumes the DP from the longest cached prefix of `hypothesis` and
    /// stores every newly computed row back into the trie.
    pub fn evaluate(&mut self, hypothesis: &[&'a str]) -> usize {
        let (matched, resume_row) = self.longest_cached_prefix(hypothesis);

        let mut rows: Vec<Vec<usize>> = Vec::with_capacity(hypothesis.len() - matched);
        let mut previous = resume_row;

        for &word in &hypothesis[matched..] {
            let mut current = Vec::with_capacity(self.reference.len() + 1);
            current.push(previous[0] + 1);

            for (j, &ref_word) in self.reference.iter().enumerate() {
                let insertions = previous[j + 1] + 1;
                let deletions = current[j] + 1;
                let substitutions = previous[j] + usize::from(word != ref_word);
                current.push(insertions.min(deletions).min(substitutions));
            }

            rows.push(current.clone());
            previous = current;
        }

        let score = previous[self.reference.len()];
        self.store_rows(hypothesis, matched, rows);
        score
    }

    /// Walk the trie along `hypothesis` and return the length of the longest
    /// prefix with a cached row, together with a copy of that row.
    fn longest_cached_prefix(&self, hypothesis: &[&'a str]) -> (usize, Vec<usize>) {
        let mut node = &self.root;
        let mut matched = 0;
        let mut row = &self.root.row;

        for (idx, &word) in hypothesis.iter().enumerate() {
            let Some(child) = node.children.get(word) else {
                break;
            };
            if child.row.is_none() {
                break;
            }
            matched = idx + 1;
            row = &child.row;
            node = child;
        }

        match row {
            Some(row) => (matched, row.clone()),
            // Unreachable: the root row is always populated at construction.
            None => (0, (0..=self.reference.len()).collect()),
        }
    }

    /// Insert the freshly computed rows along the path `hypothesis[matched..]`,
    /// creating trie nodes as needed. Existing rows are never overwritten.
    fn store_rows(&mut self, hypothesis: &[&'a str], matched: usize, rows: Vec<Vec<usize>>) {
        let mut node = &mut self.root;

        for &word in &hypothesis[..matched] {
            node = node.children.entry(word).or_default();
        }

        for (&word, row) in hypothesis[matched..].iter().zip(rows) {
            node = node.children.entry(word).or_default();
            if node.row.is_none() {
                node.row = Some(row);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::distance::edit_distance;

    #[test]
    fn test_matches_direct_computation() {
        let reference = ["the", "cat", "sat", "on", "the", "mat"];
        let mut cached = CachedEditDistance::new(&reference);

        let hypotheses: [&[&str]; 5] = [
            &["the", "cat", "sat", "on", "the", "mat"],
            &["the", "cat", "on", "the", "mat", "sat"],
            &["the", "dog", "sat"],
            &[],
            &["mat", "the", "on", "sat", "cat", "the"],
        ];

        for hyp in hypotheses {
            assert_eq!(
                cached.evaluate(hyp),
                edit_distance(hyp, &reference),
                "cached and direct disagree for {hyp:?}"
            );
        }
    }

    #[test]
    fn test_shared_prefix_reuse_is_transparent() {
        let reference = ["a", "b", "c", "d"];
        let mut cached = CachedEditDistance::new(&reference);

        // Evaluate a long hypothesis first so its prefix rows populate the
        // trie, then variants diverging at every possible point.
        assert_eq!(cached.evaluate(&["a", "b", "x", "d"]), 1);
        assert_eq!(cached.evaluate(&["a", "b", "c", "d"]), 0);
        assert_eq!(cached.evaluate(&["a", "b", "x", "y"]), 2);
        assert_eq!(cached.evaluate(&["a", "b"]), 2);
        assert_eq!(cached.evaluate(&["x", "b", "c", "d"]), 1);
    }

    #[test]
    fn test_repeated_evaluation_is_stable() {
        let reference = ["one", "two", "three"];
        let mut cached = CachedEditDistance::new(&reference);
        let hyp = ["two", "three", "one"];

        let first = cached.evaluate(&hyp);
        let second = cached.evaluate(&hyp);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_hypothesis() {
        let reference = ["a", "b"];
        let mut cached = CachedEditDistance::new(&reference);
        assert_eq!(cached.evaluate(&[]), 2);
    }

    #[test]
    fn test_empty_reference() {
        let reference: [&str; 0] = [];
        let mut cached = CachedEditDistance::new(&reference);
        assert_eq!(cached.evaluate(&["a", "b", "c"]), 3);
        assert_eq!(cached.evaluate(&[]), 0);
    }
}
