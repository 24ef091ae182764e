// Vocabulary model: the fitted count vectorizer, IDF weights, and feature
// names, loaded once at startup and shared read-only for the process lifetime.

pub mod artifact;
pub mod idf;
pub mod vectorizer;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

pub use artifact::Lexicon;
pub use idf::{IdfTransformer, Norm};
pub use vectorizer::CountVectorizer;

/// Immutable fitted model. Wrap in an `Arc` to share across requests.
#[derive(Debug)]
pub struct VocabularyModel {
    vectorizer: CountVectorizer,
    idf: IdfTransformer,
    feature_names: Vec<String>,
    lexicon: Lexicon,
}

impl VocabularyModel {
    /// Load and validate the model artifact from `dir`.
    ///
    /// Any missing, unreadable, or inconsistent file is an error; callers
    /// should treat it as fatal before serving anything.
    pub fn load(dir: &Path) -> Result<Self> {
        let missing = artifact::missing_files(dir);
        if !missing.is_empty() {
            anyhow::bail!(
                "Model artifact incomplete in {}: missing {}",
                dir.display(),
                missing.join(", ")
            );
        }

        let vectorizer: CountVectorizer = artifact::read_json(dir, artifact::COUNT_VECTORIZER_FILE)?;
        let idf: IdfTransformer = artifact::read_json(dir, artifact::TFIDF_TRANSFORMER_FILE)?;
        let feature_names: Vec<String> = artifact::read_json(dir, artifact::FEATURE_NAMES_FILE)?;
        let lexicon = artifact::read_lexicon(dir)?;

        let model = Self::from_parts(vectorizer, idf, feature_names, lexicon)
            .with_context(|| format!("Invalid model artifact in {}", dir.display()))?;

        info!(
            features = model.n_features(),
            ngram_range = ?model.vectorizer.ngram_range,
            norm = ?model.idf.norm,
            custom_stop_words = model.lexicon.stop_words.is_some(),
            lemmas = model.lexicon.lemmas.len(),
            "Loaded vocabulary model"
        );

        Ok(model)
    }

    /// Assemble a model from already-parsed parts, checking that the
    /// vectorizer columns, IDF weights, and feature names line up.
    pub fn from_parts(
        vectorizer: CountVectorizer,
        idf: IdfTransformer,
        feature_names: Vec<String>,
        lexicon: Lexicon,
    ) -> Result<Self> {
        let n = feature_names.len();

        if vectorizer.n_features() != n {
            anyhow::bail!(
                "Vocabulary has {} terms but there are {} feature names",
                vectorizer.n_features(),
                n
            );
        }
        if idf.n_features() != n {
            anyhow::bail!(
                "IDF vector has {} weights but there are {} feature names",
                idf.n_features(),
                n
            );
        }

        for (term, &column) in &vectorizer.vocabulary {
            match feature_names.get(column) {
                Some(name) if name == term => {}
                Some(name) => anyhow::bail!(
                    "Vocabulary term {term:?} maps to column {column}, but feature name there is {name:?}"
                ),
                None => anyhow::bail!(
                    "Vocabulary term {term:?} maps to column {column}, outside {n} features"
                ),
            }
        }

        let (min_n, max_n) = vectorizer.ngram_range;
        if min_n == 0 || min_n > max_n {
            anyhow::bail!("Invalid n-gram range ({min_n}, {max_n})");
        }

        if let Some(pos) = idf.idf.iter().position(|w| !w.is_finite() || *w < 0.0) {
            anyhow::bail!("IDF weight for column {pos} is not a finite non-negative number");
        }

        Ok(Self {
            vectorizer,
            idf,
            feature_names,
            lexicon,
        })
    }

    pub fn vectorizer(&self) -> &CountVectorizer {
        &self.vectorizer
    }

    pub fn idf(&self) -> &IdfTransformer {
        &self.idf
    }

    /// Column-ordered vocabulary terms.
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn n_features(&self) -> usize {
        self.feature_names.len()
    }
}
