// Count vectorizer: maps a normalized document onto vocabulary columns.
//
// The fitted vocabulary may contain n-grams (stored space-joined, e.g.
// "machine learning"), so the transform walks every n in ngram_range over the
// whitespace-split tokens. Terms that aren't in the vocabulary are dropped.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

/// Fitted term -> column mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountVectorizer {
    pub vocabulary: HashMap<String, usize>,
    /// Inclusive (min, max) n-gram lengths the vocabulary was built with.
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),
    /// Record presence (1) instead of occurrence counts.
    #[serde(default)]
    pub binary: bool,
}

impl CountVectorizer {
    /// Unigram vectorizer over the given vocabulary.
    pub fn new(vocabulary: HashMap<String, usize>) -> Self {
        Self {
            vocabulary,
            ngram_range: default_ngram_range(),
            binary: false,
        }
    }

    pub fn n_features(&self) -> usize {
        self.vocabulary.len()
    }

    /// Count known terms in `doc`. Returns column -> count, column-ordered.
    pub fn transform(&self, doc: &str) -> BTreeMap<usize, f64> {
        let tokens: Vec<&str> = doc.split_whitespace().collect();
        let (min_n, max_n) = self.ngram_range;
        let mut counts = BTreeMap::new();

        for n in min_n.max(1)..=max_n {
            if n > tokens.len() {
                break;
            }
            for window in tokens.windows(n) {
                let term = window.join(" ");
                if let Some(&column) = self.vocabulary.get(&term) {
                    *counts.entry(column).or_insert(0.0) += 1.0;
                }
            }
        }

        if self.binary {
            for count in counts.values_mut() {
                *count = 1.0;
            }
        }

        counts
    }

    /// Vocabulary entries that are single words (no n-grams).
    pub fn unigrams(&self) -> impl Iterator<Item = &str> {
        self.vocabulary
            .keys()
            .map(String::as_str)
            .filter(|term| !term.contains(' '))
    }
}
