// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the CSV file on disk and the cleaned
// text column:
//
//   data.csv
//       │
//       ▼
//   CsvLoader          → RecordTable (missing values → "")
//       │
//       ▼
//   TransformPipeline  → lowercase, numbers, punctuation,
//       │                [stopwords], [stem | lemma]
//       ▼
//   cleaned TextColumn
//
// The linguistic resources the pipeline calls into
// (stoplist, stemmer, lemmatizer) each live in their own
// module so they can be tested and replaced on their own.

/// Reads the CSV dataset
pub mod loader;

/// Individual cleaning stages
pub mod transforms;

/// Fixed-order assembly of the stages
pub mod pipeline;

/// English stoplist
pub mod stopwords;

/// Snowball English stemmer
pub mod stemmer;

/// Rule-based noun lemmatizer
pub mod lemmatizer;
