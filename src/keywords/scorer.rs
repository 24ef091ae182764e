// TF-IDF scoring of a normalized document against the vocabulary model.

use crate::model::VocabularyModel;
use crate::text::NormalizedDocument;

/// Non-zero (column, weight) pairs for the terms of one document.
pub type SparseWeightVector = Vec<(usize, f64)>;

/// Count known terms in `doc` and apply the model's IDF weighting and norm.
///
/// Unknown terms are ignored; a document with no known terms yields an
/// empty vector.
pub fn score(doc: &NormalizedDocument, model: &VocabularyModel) -> SparseWeightVector {
    let counts = model.vectorizer().transform(doc.as_str());
    model.idf().transform(&counts)
}
