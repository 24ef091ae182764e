// Text processing: lenient decoding, stop words, lemmatization, and the
// normalization pipeline that feeds the TF-IDF scorer.

pub mod decode;
pub mod lemmatizer;
pub mod normalizer;
pub mod stopwords;

pub use decode::decode_lenient;
pub use normalizer::{NormalizedDocument, Normalizer};
