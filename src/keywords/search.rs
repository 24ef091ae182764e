// Vocabulary search: case-insensitive substring match over feature names.

/// Default cap on returned matches.
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Matching vocabulary terms, in vocabulary order.
pub type SearchResult = Vec<String>;

/// Terms whose lowercase form contains lowercase `query`, first `limit` only.
/// An empty query matches everything.
pub fn search(query: &str, feature_names: &[String], limit: usize) -> SearchResult {
    let needle = query.to_lowercase();
    feature_names
        .iter()
        .filter(|term| term.to_lowercase().contains(&needle))
        .take(limit)
        .cloned()
        .collect()
}
