// On-disk layout of the fitted vocabulary model.
//
// The model is produced offline and shipped as a directory of JSON files,
// one per fitted object:
//
//   count_vectorizer.json  : term -> column mapping, n-gram range
//   tfidf_transformer.json : per-column IDF weights, norm, tf scaling
//   feature_names.json     : column-ordered term list
//   lexicon.json           : (optional) stop words and lemma dictionary
//
// Files are read whole with read_to_string, so every handle is closed by the
// time the loader returns, whether it succeeded or not.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub const COUNT_VECTORIZER_FILE: &str = "count_vectorizer.json";
pub const TFIDF_TRANSFORMER_FILE: &str = "tfidf_transformer.json";
pub const FEATURE_NAMES_FILE: &str = "feature_names.json";
pub const LEXICON_FILE: &str = "lexicon.json";

/// Files that must exist for a model directory to be loadable.
pub const REQUIRED_FILES: [&str; 3] = [
    COUNT_VECTORIZER_FILE,
    TFIDF_TRANSFORMER_FILE,
    FEATURE_NAMES_FILE,
];

/// Returns the default directory for the model artifact.
/// Uses the platform data directory: ~/.local/share/lexis/model/ on Linux.
pub fn default_model_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("lexis")
        .join("model")
}

/// Names of the required artifact files missing from `dir`.
pub fn missing_files(dir: &Path) -> Vec<&'static str> {
    REQUIRED_FILES
        .iter()
        .copied()
        .filter(|name| !dir.join(name).exists())
        .collect()
}

/// Word lists captured alongside the model when it was fitted.
///
/// Shipping these with the artifact keeps normalization identical to the
/// preprocessing the model was trained on. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Lexicon {
    /// Stop-word list. When absent the English list from `stop-words` is used.
    #[serde(default)]
    pub stop_words: Option<Vec<String>>,
    /// Known dictionary base forms, used to accept lemma candidates.
    #[serde(default)]
    pub lemmas: Vec<String>,
    /// Irregular inflections: inflected form -> base form(s).
    #[serde(default)]
    pub exceptions: HashMap<String, Vec<String>>,
}

/// Read and parse one JSON artifact file from `dir`.
pub fn read_json<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<T> {
    let path = dir.join(file);
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read model artifact {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Malformed model artifact {}", path.display()))
}

/// Read the optional lexicon, returning an empty one when the file is absent.
pub fn read_lexicon(dir: &Path) -> Result<Lexicon> {
    if !dir.join(LEXICON_FILE).exists() {
        return Ok(Lexicon::default());
    }
    read_json(dir, LEXICON_FILE)
}
