// Keyword engine trait: the two operations the hosting layers call.
//
// The web handlers and the CLI only see this trait, so tests can drive them
// with a model built in memory.

use super::ranker::KeywordResult;
use super::search::SearchResult;

pub trait KeywordEngine: Send + Sync {
    /// Normalize, score, and rank `raw_text`; returns the top keywords.
    fn extract_keywords(&self, raw_text: &str) -> KeywordResult;

    /// Vocabulary terms containing `query`, case-insensitively.
    fn search_vocabulary(&self, query: &str) -> SearchResult;

    /// Number of terms in the underlying vocabulary.
    fn vocabulary_size(&self) -> usize;
}
