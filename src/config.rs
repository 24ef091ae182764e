use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::keywords::{DEFAULT_SEARCH_LIMIT, DEFAULT_TOP_N};
use crate::model::{artifact, VocabularyModel};

/// Default request body cap for uploads: 5 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

pub const DEFAULT_BIND: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory containing the fitted model artifact (LEXIS_MODEL_DIR)
    pub model_dir: PathBuf,
    /// Keywords returned per document (LEXIS_TOP_N)
    pub top_n: usize,
    /// Maximum vocabulary search matches (LEXIS_SEARCH_LIMIT)
    pub search_limit: usize,
    /// Largest accepted request body in bytes (LEXIS_MAX_UPLOAD_BYTES)
    pub max_upload_bytes: usize,
    pub bind: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default; a variable that is set but doesn't parse is
    /// an error rather than being silently replaced.
    pub fn load() -> Result<Self> {
        let model_dir = env::var("LEXIS_MODEL_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| artifact::default_model_dir());

        Ok(Self {
            model_dir,
            top_n: parse_var("LEXIS_TOP_N", env::var("LEXIS_TOP_N").ok(), DEFAULT_TOP_N)?,
            search_limit: parse_var(
                "LEXIS_SEARCH_LIMIT",
                env::var("LEXIS_SEARCH_LIMIT").ok(),
                DEFAULT_SEARCH_LIMIT,
            )?,
            max_upload_bytes: parse_var(
                "LEXIS_MAX_UPLOAD_BYTES",
                env::var("LEXIS_MAX_UPLOAD_BYTES").ok(),
                DEFAULT_MAX_UPLOAD_BYTES,
            )?,
            bind: env::var("LEXIS_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string()),
            port: parse_var("LEXIS_PORT", env::var("LEXIS_PORT").ok(), DEFAULT_PORT)?,
        })
    }

    /// Load the model from `model_dir`, pointing at LEXIS_MODEL_DIR on failure.
    pub fn load_model(&self) -> Result<VocabularyModel> {
        VocabularyModel::load(&self.model_dir).with_context(|| {
            format!(
                "Could not load the model from {}. \
                 Set LEXIS_MODEL_DIR to the directory holding the fitted model.",
                self.model_dir.display()
            )
        })
    }
}

/// Parse an optional raw env value, falling back to `default` when unset or blank.
fn parse_var<T>(key: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|e| anyhow::anyhow!("{key}={value:?} is not valid: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_var_defaults_when_unset_or_blank() {
        assert_eq!(parse_var("X", None, 20usize).unwrap(), 20);
        assert_eq!(parse_var("X", Some("  ".to_string()), 20usize).unwrap(), 20);
    }

    #[test]
    fn test_parse_var_reads_value() {
        assert_eq!(parse_var("X", Some(" 5 ".to_string()), 20usize).unwrap(), 5);
    }

    #[test]
    fn test_parse_var_rejects_garbage() {
        let err = parse_var("LEXIS_PORT", Some("eighty".to_string()), 8000u16).unwrap_err();
        assert!(format!("{err}").contains("LEXIS_PORT"));
    }

    #[test]
    fn test_load_model_fails_for_empty_dir() {
        let config = Config {
            model_dir: std::env::temp_dir().join("lexis-config-no-model"),
            top_n: DEFAULT_TOP_N,
            search_limit: DEFAULT_SEARCH_LIMIT,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            bind: DEFAULT_BIND.to_string(),
            port: DEFAULT_PORT,
        };
        let err = config.load_model().unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("LEXIS_MODEL_DIR"));
        assert!(message.contains("missing count_vectorizer.json"));
    }
}
