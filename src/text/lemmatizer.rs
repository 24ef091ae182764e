// Noun lemmatizer in the style of WordNet's morphy.
//
// Lookup order for a word:
//   1. Irregular exceptions ("children" -> "child").
//   2. Suffix detachment rules ("cities" -> "city", "boxes" -> "box"),
//      reapplied to the derived forms until one is accepted or none are left.
// Candidates, including the word itself, only count if they are in the noun
// dictionary. The shortest accepted candidate wins; with none accepted the
// word comes back unchanged.
//
// The dictionary is the model lexicon's lemma list. A model without one falls
// back to the vocabulary unigrams, which may include non-nouns.

use std::collections::{HashMap, HashSet};

use crate::model::VocabularyModel;

/// Noun suffix detachment rules: (suffix, replacement).
const NOUN_RULES: [(&str, &str); 9] = [
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

/// Common irregular plurals. Lexicon exceptions are merged on top.
const IRREGULAR_NOUNS: [(&str, &str); 16] = [
    ("children", "child"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("knives", "knife"),
    ("lice", "louse"),
    ("lives", "life"),
    ("men", "man"),
    ("mice", "mouse"),
    ("oxen", "ox"),
    ("teeth", "tooth"),
    ("wives", "wife"),
    ("women", "woman"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("analyses", "analysis"),
    ("theses", "thesis"),
];

#[derive(Debug, Clone, Default)]
pub struct Lemmatizer {
    lemmas: HashSet<String>,
    exceptions: HashMap<String, Vec<String>>,
}

impl Lemmatizer {
    /// Build a lemmatizer over an explicit dictionary with the built-in
    /// irregular forms.
    pub fn new<I, S>(lemmas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut exceptions: HashMap<String, Vec<String>> = HashMap::new();
        for (inflected, base) in IRREGULAR_NOUNS {
            exceptions
                .entry(inflected.to_string())
                .or_default()
                .push(base.to_string());
        }
        Self {
            lemmas: lemmas.into_iter().map(Into::into).collect(),
            exceptions,
        }
    }

    /// Dictionary = lexicon lemmas, or vocabulary unigrams when the lexicon
    /// has none; exceptions = built-ins + lexicon exceptions.
    pub fn for_model(model: &VocabularyModel) -> Self {
        let lexicon = model.lexicon();
        let mut lemmatizer = if lexicon.lemmas.is_empty() {
            Self::new(model.vectorizer().unigrams())
        } else {
            Self::new(lexicon.lemmas.iter().map(|l| l.to_lowercase()))
        };

        for (inflected, bases) in &lexicon.exceptions {
            let entry = lemmatizer
                .exceptions
                .entry(inflected.to_lowercase())
                .or_default();
            for base in bases {
                let base = base.to_lowercase();
                if !entry.contains(&base) {
                    entry.push(base);
                }
            }
        }
        lemmatizer
    }

    pub fn dictionary_size(&self) -> usize {
        self.lemmas.len()
    }

    /// Reduce `word` (already lowercase) to its noun base form.
    pub fn lemmatize(&self, word: &str) -> String {
        if let Some(bases) = self.exceptions.get(word) {
            let candidates = std::iter::once(word).chain(bases.iter().map(String::as_str));
            return self.shortest_known(candidates).unwrap_or_else(|| word.to_string());
        }

        let mut forms = apply_rules(&[word.to_string()]);
        let first = std::iter::once(word).chain(forms.iter().map(String::as_str));
        if let Some(lemma) = self.shortest_known(first) {
            return lemma;
        }

        // Every rule shortens the form or ends it in "man", so this terminates.
        while !forms.is_empty() {
            forms = apply_rules(&forms);
            if let Some(lemma) = self.shortest_known(forms.iter().map(String::as_str)) {
                return lemma;
            }
        }
        word.to_string()
    }

    fn shortest_known<'a>(&self, candidates: impl Iterator<Item = &'a str>) -> Option<String> {
        candidates
            .filter(|c| !c.is_empty() && self.lemmas.contains(*c))
            .min_by_key(|c| c.len())
            .map(str::to_string)
    }
}

/// One round of suffix detachment over every form.
fn apply_rules(forms: &[String]) -> Vec<String> {
    let mut derived = Vec::new();
    for form in forms {
        for (suffix, replacement) in NOUN_RULES {
            if let Some(stem) = form.strip_suffix(suffix) {
                let candidate = format!("{stem}{replacement}");
                if !candidate.is_empty() && candidate != *form && !derived.contains(&candidate) {
                    derived.push(candidate);
                }
            }
        }
    }
    derived
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lemmatizer() -> Lemmatizer {
        Lemmatizer::new([
            "box", "city", "process", "glass", "child", "data", "knife", "system", "church",
        ])
    }

    #[test]
    fn test_regular_plurals() {
        let l = lemmatizer();
        assert_eq!(l.lemmatize("boxes"), "box");
        assert_eq!(l.lemmatize("cities"), "city");
        assert_eq!(l.lemmatize("systems"), "system");
        assert_eq!(l.lemmatize("churches"), "church");
    }

    #[test]
    fn test_ses_rule_keeps_double_s() {
        let l = lemmatizer();
        assert_eq!(l.lemmatize("processes"), "process");
        assert_eq!(l.lemmatize("glasses"), "glass");
    }

    #[test]
    fn test_base_form_is_unchanged() {
        let l = lemmatizer();
        assert_eq!(l.lemmatize("process"), "process");
        assert_eq!(l.lemmatize("data"), "data");
    }

    #[test]
    fn test_irregular_exceptions() {
        let l = lemmatizer();
        assert_eq!(l.lemmatize("children"), "child");
        assert_eq!(l.lemmatize("knives"), "knife");
    }

    #[test]
    fn test_unknown_word_is_returned_as_is() {
        let l = lemmatizer();
        assert_eq!(l.lemmatize("running"), "running");
        assert_eq!(l.lemmatize("widgets"), "widgets");
    }

    #[test]
    fn test_rules_reapply_to_derived_forms() {
        // "glasseses" -> "glasses" (unknown) -> "glass".
        let l = lemmatizer();
        assert_eq!(l.lemmatize("glasseses"), "glass");
        assert_eq!(l.lemmatize("boxess"), "box");
    }

    #[test]
    fn test_first_pass_match_stops_reduction() {
        let l = Lemmatizer::new(["glasses", "glass"]);
        assert_eq!(l.lemmatize("glasseses"), "glasses");
    }

    #[test]
    fn test_exception_base_outside_dictionary_is_ignored() {
        // "mouse" is not in the dictionary, so "mice" stays put.
        let l = lemmatizer();
        assert_eq!(l.lemmatize("mice"), "mice");
    }
}
