// ============================================================
// Layer 4 — Stemmer
// ============================================================
// Suffix-stripping stemmer backed by the Snowball English
// algorithm (Porter2) from the rust-stemmers crate.
//
// Stems are not words: "damaged" → "damag". They are only
// meant to merge inflected forms for counting.
//
// Reference: rust-stemmers crate documentation

use rust_stemmers::{Algorithm, Stemmer};

use crate::domain::traits::WordNormalizer;

pub struct SnowballStemmer {
    inner: Stemmer,
}

impl SnowballStemmer {
    pub fn english() -> Self {
        Self {
            inner: Stemmer::create(Algorithm::English),
        }
    }
}

impl WordNormalizer for SnowballStemmer {
    fn normalize(&self, word: &str) -> String {
        self.inner.stem(word).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inflections_merge() {
        let s = SnowballStemmer::english();
        assert_eq!(s.normalize("running"), "run");
        assert_eq!(s.normalize("runs"), "run");
        assert_eq!(s.normalize("cats"), "cat");
        assert_eq!(s.normalize("connection"), "connect");
    }

    #[test]
    fn test_stems_need_not_be_words() {
        assert_eq!(SnowballStemmer::english().normalize("damaged"), "damag");
    }
}
