// Lexis: keyword extraction over a pre-fitted TF-IDF model.
//
// This is the library root. Each module corresponds to one stage of the
// pipeline (raw text -> normalized tokens -> TF-IDF weights -> ranked
// keywords) or to a layer hosting it.

pub mod config;
pub mod keywords;
pub mod model;
pub mod output;
pub mod text;

#[cfg(feature = "web")]
pub mod web;
