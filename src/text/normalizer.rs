// Text normalizer: raw document text to a space-joined token string.
//
// Pipeline (order matters):
//   lowercase -> strip <tags> -> non a-z to spaces -> word segmentation
//   -> drop stop words and tokens shorter than MIN_TOKEN_LEN -> lemmatize
//
// Stop-word and length filtering run before lemmatization, so a lemma is not
// re-checked against either.

use anyhow::{Context, Result};
use regex_lite::Regex;
use unicode_segmentation::UnicodeSegmentation;

use super::lemmatizer::Lemmatizer;
use super::stopwords::StopWords;
use crate::model::VocabularyModel;

/// Tokens shorter than this are discarded.
pub const MIN_TOKEN_LEN: usize = 3;

/// Whitespace-separated normalized tokens, ready for vectorization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedDocument(String);

impl NormalizedDocument {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }
}

/// Holds the compiled patterns and word lists; build once, reuse per request.
#[derive(Debug, Clone)]
pub struct Normalizer {
    tag_pattern: Regex,
    non_alpha: Regex,
    stop_words: StopWords,
    lemmatizer: Lemmatizer,
}

impl Normalizer {
    pub fn new(stop_words: StopWords, lemmatizer: Lemmatizer) -> Result<Self> {
        Ok(Self {
            tag_pattern: Regex::new(r"<.*?>").context("Failed to compile tag pattern")?,
            non_alpha: Regex::new(r"[^a-z]").context("Failed to compile non-alpha pattern")?,
            stop_words,
            lemmatizer,
        })
    }

    /// Normalizer using the model's lexicon and vocabulary.
    pub fn for_model(model: &VocabularyModel) -> Result<Self> {
        Self::new(
            StopWords::for_lexicon(model.lexicon()),
            Lemmatizer::for_model(model),
        )
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    pub fn lemmatizer(&self) -> &Lemmatizer {
        &self.lemmatizer
    }

    /// Normalize raw text. Empty or fully stripped input gives an empty document.
    pub fn normalize(&self, raw_text: &str) -> NormalizedDocument {
        let lowered = raw_text.to_lowercase();
        let untagged = self.tag_pattern.replace_all(&lowered, " ");
        let alphabetic = self.non_alpha.replace_all(&untagged, " ");

        let tokens: Vec<String> = alphabetic
            .unicode_words()
            .filter(|word| word.len() >= MIN_TOKEN_LEN && !self.stop_words.contains(word))
            .map(|word| self.lemmatizer.lemmatize(word))
            .collect();

        NormalizedDocument(tokens.join(" "))
    }
}
