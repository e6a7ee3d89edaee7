//! Corpus input: file reading and tokenization.

use crate::error::{CharacterError, Result};
use std::path::Path;

/// A validated hypothesis/reference corpus: equally many sentences on each
/// side, in line order.
#[derive(Debug, Clone)]
pub struct Corpus {
    pub hypotheses: Vec<String>,
    pub references: Vec<String>,
}

impl Corpus {
    /// Number of sentence pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hypotheses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hypotheses.is_empty()
    }
}

/// Split a sentence into word tokens on Unicode whitespace.
///
/// This is the only tokenization the metric defines; anything fancier
/// (casing, punctuation handling) is up to the producer of the files.
#[must_use]
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Read a UTF-8 corpus file into one string per line.
fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content =
        std::fs::read_to_string(path).map_err(|err| CharacterError::io(path, err))?;
    Ok(content.lines().map(str::to_owned).collect())
}

/// Read and validate a hypothesis/reference file pair.
///
/// Fails if the files have differing line counts or the corpus is empty;
/// sentence pairing is purely positional, so a mismatch means the score of
/// every following pair would be meaningless.
pub fn read_corpus(hypothesis_path: &Path, reference_path: &Path) -> Result<Corpus> {
    let hypotheses = read_lines(hypothesis_path)?;
    let references = read_lines(reference_path)?;

    if hypotheses.len() != references.len() {
        return Err(CharacterError::line_count_mismatch(
            hypotheses.len(),
            references.len(),
        ));
    }
    if hypotheses.is_empty() {
        return Err(CharacterError::empty_corpus());
    }

    tracing::debug!(
        sentences = hypotheses.len(),
        hypothesis = %hypothesis_path.display(),
        reference = %reference_path.display(),
        "corpus loaded"
    );

    Ok(Corpus {
        hypotheses,
        references,
    })
}
