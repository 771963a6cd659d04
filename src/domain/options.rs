// ============================================================
// Layer 3 — Pipeline Options
// ============================================================
// Closed enumerations for the choices a run can make.
//
// Stemming and lemmatization both rewrite every token, and
// only one may run. Two independent booleans would allow
// the invalid "both" state; WordNormalization cannot.
//
// Reference: Rust Book §6 (Enums and Pattern Matching)

use serde::Serialize;

use crate::domain::error::{PreprocessError, PreprocessResult};

/// Which word-level normalisation runs after stopword removal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WordNormalization {
    #[default]
    None,
    Stem,
    Lemmatize,
}

impl WordNormalization {
    /// Resolve the two user-facing flags. Both set is a configuration error.
    pub fn from_flags(stem: bool, lemma: bool) -> PreprocessResult<Self> {
        match (stem, lemma) {
            (true, true) => Err(PreprocessError::Configuration(
                "--stem and --lemma are mutually exclusive".to_string(),
            )),
            (true, false) => Ok(Self::Stem),
            (false, true) => Ok(Self::Lemmatize),
            (false, false) => Ok(Self::None),
        }
    }
}

/// How punctuation removal tidies the whitespace it leaves behind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpaceCollapse {
    /// Each non-overlapping pair of whitespace characters becomes one space.
    /// A run of three becomes two; a run of four becomes two.
    #[default]
    Pairwise,
    /// Every whitespace run becomes one space.
    Full,
}

/// Text encoding of the input dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputEncoding {
    #[default]
    Latin1,
    Utf8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_resolve() {
        assert_eq!(WordNormalization::from_flags(false, false).unwrap(), WordNormalization::None);
        assert_eq!(WordNormalization::from_flags(true, false).unwrap(), WordNormalization::Stem);
        assert_eq!(WordNormalization::from_flags(false, true).unwrap(), WordNormalization::Lemmatize);
    }

    #[test]
    fn test_stem_and_lemma_conflict() {
        let err = WordNormalization::from_flags(true, true).unwrap_err();
        assert!(matches!(err, PreprocessError::Configuration(_)));
    }

    #[test]
    fn test_serialises_lowercase() {
        let json = serde_json::to_string(&WordNormalization::Lemmatize).unwrap();
        assert_eq!(json, "\"lemmatize\"");
    }
}
