// Stop-word filtering.
//
// Uses the list shipped in the model lexicon when there is one, so filtering
// matches what the model was fitted on. Otherwise falls back to the English
// NLTK English list from the stop-words crate.

use std::collections::HashSet;

use stop_words::{get, LANGUAGE};

use crate::model::Lexicon;

/// A fixed set of lowercase words excluded from normalized documents.
#[derive(Debug, Clone)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// NLTK English stop words (179) from the stop-words crate.
    pub fn english() -> Self {
        let words: Vec<String> = get(LANGUAGE::English);
        Self::from_words(words)
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// The lexicon's list if present, otherwise English defaults.
    pub fn for_lexicon(lexicon: &Lexicon) -> Self {
        match &lexicon.stop_words {
            Some(words) => Self::from_words(words),
            None => Self::english(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_contains_common_function_words() {
        let sw = StopWords::english();
        for word in ["the", "and", "is", "of"] {
            assert!(sw.contains(word), "expected {word} to be a stop word");
        }
    }

    #[test]
    fn test_english_is_nltk_list() {
        let sw = StopWords::english();
        assert_eq!(sw.len(), 179);
        assert!(!sw.contains("system"));
        assert!(!sw.contains("information"));
    }

    #[test]
    fn test_from_words_lowercases_and_trims() {
        let sw = StopWords::from_words(["The ", "AND", ""]);
        assert!(sw.contains("the"));
        assert!(sw.contains("and"));
        assert_eq!(sw.len(), 2);
    }

    #[test]
    fn test_lexicon_list_overrides_default() {
        let lexicon = Lexicon {
            stop_words: Some(vec!["engine".to_string()]),
            ..Lexicon::default()
        };
        let sw = StopWords::for_lexicon(&lexicon);
        assert!(sw.contains("engine"));
        assert!(!sw.contains("the"));
    }
}
