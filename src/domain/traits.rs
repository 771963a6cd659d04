// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The seams of the system. Each one has a concrete
// implementation in the data layer, and the application
// layer only talks to the trait:
//
//   RecordSource   ← CsvLoader
//   TextTransform  ← Lowercase, RemoveNumbers, RemovePunctuation,
//                    RemoveStopwords, NormalizeWords
//   WordNormalizer ← SnowballStemmer, NounLemmatizer
//
// A different dataset format or a different stemmer is a
// new impl, not a change to the pipeline.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use crate::domain::error::PreprocessResult;
use crate::domain::record_table::RecordTable;

// ─── RecordSource ─────────────────────────────────────────────────────────────
/// Anything that can produce the dataset for a run.
pub trait RecordSource {
    /// Load every record, with missing values already replaced by "".
    fn load(&self) -> PreprocessResult<RecordTable>;
}

// ─── TextTransform ────────────────────────────────────────────────────────────
/// One pure, value-level pipeline stage.
///
/// `apply` must be total: it maps every input string to an
/// output string and never drops a row.
pub trait TextTransform {
    /// Short stage name used in logs.
    fn name(&self) -> &'static str;

    /// Transform a single text value.
    fn apply(&self, text: &str) -> String;
}

// ─── WordNormalizer ───────────────────────────────────────────────────────────
/// Rewrites one token into its base form (stem or lemma).
pub trait WordNormalizer {
    fn normalize(&self, word: &str) -> String;
}
