// IDF transformer: turns raw term counts into normalized TF-IDF weights.
//
//   w[col] = tf(count) * idf[col]     (idf factor skipped when use_idf = false)
//   tf(count) = count, or 1 + ln(count) with sublinear_tf
//
// The weighted vector is then scaled by its L2 (default) or L1 norm.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Row normalization applied after weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    L1,
    L2,
}

fn default_norm() -> Option<Norm> {
    Some(Norm::L2)
}

fn default_true() -> bool {
    true
}

/// Fitted inverse-document-frequency weights, one per vocabulary column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdfTransformer {
    pub idf: Vec<f64>,
    /// `null` in the artifact disables normalization.
    #[serde(default = "default_norm")]
    pub norm: Option<Norm>,
    #[serde(default = "default_true")]
    pub use_idf: bool,
    #[serde(default)]
    pub sublinear_tf: bool,
}

impl IdfTransformer {
    /// L2-normalized transformer with the given weights.
    pub fn new(idf: Vec<f64>) -> Self {
        Self {
            idf,
            norm: default_norm(),
            use_idf: true,
            sublinear_tf: false,
        }
    }

    pub fn n_features(&self) -> usize {
        self.idf.len()
    }

    /// Weight and normalize a column -> count vector.
    ///
    /// Returns only non-zero (column, weight) pairs in column order.
    pub fn transform(&self, counts: &BTreeMap<usize, f64>) -> Vec<(usize, f64)> {
        let mut weighted: Vec<(usize, f64)> = counts
            .iter()
            .filter(|(_, &count)| count > 0.0)
            .map(|(&col, &count)| {
                let tf = if self.sublinear_tf {
                    1.0 + count.ln()
                } else {
                    count
                };
                let idf = if self.use_idf {
                    self.idf.get(col).copied().unwrap_or(0.0)
                } else {
                    1.0
                };
                (col, tf * idf)
            })
            .collect();

        let norm = match self.norm {
            Some(Norm::L2) => weighted.iter().map(|(_, w)| w * w).sum::<f64>().sqrt(),
            Some(Norm::L1) => weighted.iter().map(|(_, w)| w.abs()).sum(),
            None => 1.0,
        };
        if norm > 0.0 {
            for (_, w) in &mut weighted {
                *w /= norm;
            }
        }

        weighted.retain(|(_, w)| *w != 0.0);
        weighted
    }
}
