// Keyword ranking: order weighted terms and keep the top N.
//
// Sort key is (weight, column) descending on both, so equal weights put the
// higher column first. Scores are rounded to 3 decimals only after sorting;
// terms that round to the same value keep their pre-rounding order.

use indexmap::IndexMap;

use super::scorer::SparseWeightVector;

/// Term -> rounded score, in rank order.
pub type KeywordResult = IndexMap<String, f64>;

/// Decimal places kept in reported scores.
pub const SCORE_DECIMALS: i32 = 3;

/// Round to `SCORE_DECIMALS` places, ties to even.
pub fn round_score(score: f64) -> f64 {
    let scale = 10f64.powi(SCORE_DECIMALS);
    (score * scale).round_ties_even() / scale
}

/// Sort `weights` descending by (weight, column).
pub fn sort_weights(weights: &mut SparseWeightVector) {
    weights.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| b.0.cmp(&a.0)));
}

/// Rank `weights` and map the first `top_n` columns to their feature names.
pub fn rank(weights: &[(usize, f64)], feature_names: &[String], top_n: usize) -> KeywordResult {
    let mut sorted = weights.to_vec();
    sort_weights(&mut sorted);

    sorted
        .into_iter()
        .take(top_n)
        .filter_map(|(column, weight)| {
            feature_names
                .get(column)
                .map(|name| (name.clone(), round_score(weight)))
        })
        .collect()
}
