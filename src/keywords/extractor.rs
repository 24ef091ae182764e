// TF-IDF keyword engine: normalizer + scorer + ranker over a shared model.
//
// Holds no per-request state: each call builds its own normalized document
// and weight vector, and the model is only ever read.

use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use super::ranker::{rank, KeywordResult};
use super::scorer::score;
use super::search::{search, SearchResult, DEFAULT_SEARCH_LIMIT};
use super::traits::KeywordEngine;
use crate::model::VocabularyModel;
use crate::text::Normalizer;

/// Keywords returned per document unless configured otherwise.
pub const DEFAULT_TOP_N: usize = 20;

pub struct TfIdfKeywordEngine {
    model: Arc<VocabularyModel>,
    normalizer: Normalizer,
    /// How many keywords to return per document
    pub top_n: usize,
    /// Maximum vocabulary search matches
    pub search_limit: usize,
}

impl TfIdfKeywordEngine {
    /// Engine with the default limits (20 keywords, 20 search matches).
    pub fn new(model: Arc<VocabularyModel>) -> Result<Self> {
        let normalizer = Normalizer::for_model(&model)?;
        debug!(
            stop_words = normalizer.stop_words().len(),
            lemmas = normalizer.lemmatizer().dictionary_size(),
            "Built text normalizer"
        );
        Ok(Self {
            model,
            normalizer,
            top_n: DEFAULT_TOP_N,
            search_limit: DEFAULT_SEARCH_LIMIT,
        })
    }

    pub fn with_limits(mut self, top_n: usize, search_limit: usize) -> Self {
        self.top_n = top_n;
        self.search_limit = search_limit;
        self
    }

    pub fn model(&self) -> &VocabularyModel {
        &self.model
    }
}

impl KeywordEngine for TfIdfKeywordEngine {
    fn extract_keywords(&self, raw_text: &str) -> KeywordResult {
        let doc = self.normalizer.normalize(raw_text);
        let weights = score(&doc, &self.model);
        let keywords = rank(&weights, self.model.feature_names(), self.top_n);

        debug!(
            input_chars = raw_text.len(),
            tokens = doc.tokens().count(),
            known_terms = weights.len(),
            keywords = keywords.len(),
            "Extracted keywords"
        );

        keywords
    }

    fn search_vocabulary(&self, query: &str) -> SearchResult {
        let results = search(query, self.model.feature_names(), self.search_limit);
        debug!(query, matches = results.len(), "Searched vocabulary");
        results
    }

    fn vocabulary_size(&self) -> usize {
        self.model.n_features()
    }
}
