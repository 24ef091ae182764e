// Keyword extraction: TF-IDF scoring, top-N ranking, and vocabulary search.

pub mod extractor;
pub mod ranker;
pub mod scorer;
pub mod search;
pub mod traits;

pub use extractor::{TfIdfKeywordEngine, DEFAULT_TOP_N};
pub use ranker::KeywordResult;
pub use search::{SearchResult, DEFAULT_SEARCH_LIMIT};
pub use traits::KeywordEngine;
