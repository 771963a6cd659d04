// ============================================================
// Layer 4 — Text Transforms
// ============================================================
// The individual cleaning stages. Each one is a small struct
// implementing TextTransform, so the pipeline can hold them
// in a Vec<Box<dyn TextTransform>> and run them in order.
//
// Stages and what they do to "Item: 59-4-2-25, damaged.":
//
//   Lowercase          → "item: 59-4-2-25, damaged."
//   RemoveNumbers      → "item: ---, damaged."
//   RemovePunctuation  → "item  damaged"  → "item damaged"
//
// RemoveNumbers must run before RemovePunctuation: with the
// digits still present, "59-4-2-25" is a run of hyphens
// flanked by word characters and every hyphen would survive.
//
// Word-level stages (stopwords, stem, lemma) split on any
// whitespace and rejoin with single spaces.
//
// Reference: regex crate documentation
//            Rust Book §8 (Strings), §17 (Trait Objects)

use regex::Regex;

use crate::data::stopwords::StopwordSet;
use crate::domain::options::SpaceCollapse;
use crate::domain::traits::{TextTransform, WordNormalizer};

/// `\w` in the regex sense: letters, digits, underscore.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

// ─── Lowercase ────────────────────────────────────────────────────────────────
pub struct Lowercase;

impl TextTransform for Lowercase {
    fn name(&self) -> &'static str {
        "lowercase"
    }

    fn apply(&self, text: &str) -> String {
        text.to_lowercase()
    }
}

// ─── RemoveNumbers ────────────────────────────────────────────────────────────
/// Deletes every run of Unicode decimal digits.
pub struct RemoveNumbers {
    digits: Regex,
}

impl RemoveNumbers {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            digits: Regex::new(r"\d+")?,
        })
    }
}

impl TextTransform for RemoveNumbers {
    fn name(&self) -> &'static str {
        "remove-numbers"
    }

    fn apply(&self, text: &str) -> String {
        self.digits.replace_all(text, "").into_owned()
    }
}

// ─── RemovePunctuation ────────────────────────────────────────────────────────
/// Keeps word characters, whitespace, and hyphens with a word
/// character on both sides. Then tidies the gaps left behind.
pub struct RemovePunctuation {
    whitespace: Regex,
}

impl RemovePunctuation {
    pub fn new(collapse: SpaceCollapse) -> Result<Self, regex::Error> {
        let pattern = match collapse {
            SpaceCollapse::Pairwise => r"\s{2}",
            SpaceCollapse::Full => r"\s+",
        };
        Ok(Self {
            whitespace: Regex::new(pattern)?,
        })
    }

    /// Character filter. Neighbours are judged on the input,
    /// not on what has been kept so far.
    fn strip(text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut out = String::with_capacity(text.len());

        for (i, &c) in chars.iter().enumerate() {
            let keep = if is_word_char(c) || c.is_whitespace() {
                true
            } else if c == '-' {
                let before = i.checked_sub(1).and_then(|j| chars.get(j)).copied();
                let after = chars.get(i + 1).copied();
                before.is_some_and(is_word_char) && after.is_some_and(is_word_char)
            } else {
                false
            };

            if keep {
                out.push(c);
            }
        }
        out
    }
}

impl TextTransform for RemovePunctuation {
    fn name(&self) -> &'static str {
        "remove-punctuation"
    }

    fn apply(&self, text: &str) -> String {
        let stripped = Self::strip(text);
        self.whitespace.replace_all(&stripped, " ").into_owned()
    }
}

// ─── RemoveStopwords ──────────────────────────────────────────────────────────
pub struct RemoveStopwords {
    stopwords: StopwordSet,
}

impl RemoveStopwords {
    pub fn new(stopwords: StopwordSet) -> Self {
        Self { stopwords }
    }
}

impl TextTransform for RemoveStopwords {
    fn name(&self) -> &'static str {
        "remove-stopwords"
    }

    fn apply(&self, text: &str) -> String {
        text.split_whitespace()
            .filter(|w| !self.stopwords.contains(w))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// ─── NormalizeWords ───────────────────────────────────────────────────────────
/// Runs a WordNormalizer (stemmer or lemmatizer) over every token.
pub struct NormalizeWords {
    name:       &'static str,
    normalizer: Box<dyn WordNormalizer>,
}

impl NormalizeWords {
    pub fn new(name: &'static str, normalizer: Box<dyn WordNormalizer>) -> Self {
        Self { name, normalizer }
    }
}

impl TextTransform for NormalizeWords {
    fn name(&self) -> &'static str {
        self.name
    }

    fn apply(&self, text: &str) -> String {
        text.split_whitespace()
            .map(|w| self.normalizer.normalize(w))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::lemmatizer::NounLemmatizer;
    use crate::data::stemmer::SnowballStemmer;

    fn punct() -> RemovePunctuation {
        RemovePunctuation::new(SpaceCollapse::Pairwise).unwrap()
    }

    #[test]
    fn test_lowercase_idempotent() {
        let once = Lowercase.apply("Roman COIN, AD 43");
        assert_eq!(once, "roman coin, ad 43");
        assert_eq!(Lowercase.apply(&once), once);
    }

    #[test]
    fn test_remove_numbers_leaves_no_digits() {
        let r = RemoveNumbers::new().unwrap();
        let out = r.apply("ad 1530-1, no. 59-4-2-25 ٣");
        assert!(!out.chars().any(|c| c.is_ascii_digit()));
        assert_eq!(out, "ad -, no. --- ");
    }

    #[test]
    fn test_mid_word_hyphen_kept() {
        assert_eq!(punct().apply("hand-made pot"), "hand-made pot");
        assert_eq!(punct().apply("x-ray"), "x-ray");
    }

    #[test]
    fn test_edge_and_standalone_hyphens_removed() {
        assert_eq!(punct().apply("-lead"), "lead");
        assert_eq!(punct().apply("lead-"), "lead");
        assert_eq!(punct().apply("a - b"), "a b");
        assert_eq!(punct().apply("a--b"), "ab");
    }

    #[test]
    fn test_punctuation_removed() {
        assert_eq!(punct().apply("it's (very) old!"), "its very old");
        assert_eq!(punct().apply("snake_case"), "snake_case");
    }

    #[test]
    fn test_numbers_then_punctuation_on_date_range() {
        let text = RemoveNumbers::new().unwrap().apply("ad 1530-1");
        let out = punct().apply(&text);
        assert_eq!(out.split_whitespace().collect::<Vec<_>>(), vec!["ad"]);
    }

    #[test]
    fn test_pairwise_collapse_only_halves_long_runs() {
        // Non-overlapping pairs: three spaces become two, four become two.
        assert_eq!(punct().apply("a   b"), "a  b");
        assert_eq!(punct().apply("a    b"), "a  b");
        assert_eq!(punct().apply("a  b"), "a b");
    }

    #[test]
    fn test_full_collapse() {
        let full = RemovePunctuation::new(SpaceCollapse::Full).unwrap();
        assert_eq!(full.apply("a   b"), "a b");
        assert_eq!(full.apply("a \t\n b"), "a b");
    }

    #[test]
    fn test_punctuation_idempotent_on_clean_text() {
        let once = punct().apply("item: damaged, hand-made");
        assert_eq!(once, "item damaged hand-made");
        assert_eq!(punct().apply(&once), once);
    }

    #[test]
    fn test_stopwords_removed_and_rejoined() {
        let s = RemoveStopwords::new(StopwordSet::english());
        assert_eq!(s.apply("the  pot and   the lid"), "pot lid");
        assert_eq!(s.apply("the and"), "");
    }

    #[test]
    fn test_normalize_words_stem() {
        let stage = NormalizeWords::new("stem", Box::new(SnowballStemmer::english()));
        assert_eq!(stage.apply("cats  running"), "cat run");
    }

    #[test]
    fn test_normalize_words_lemma() {
        let stage = NormalizeWords::new("lemmatize", Box::new(NounLemmatizer::new()));
        assert_eq!(stage.apply("cats running"), "cat running");
        assert_eq!(stage.apply("cat runs"), "cat run");
    }
}
