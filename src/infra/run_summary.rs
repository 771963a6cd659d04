// ============================================================
// Layer 6 — Run Summary
// ============================================================
// A JSON record of one run: what was asked for, what came
// out, and where it went. Saved next to the other artifacts
// so an output folder explains itself later.
//
// Example:
//   {
//     "timestamp": "2024-05-01-14-03-59",
//     "arguments": ["--stop"],
//     "config": { "input": "data.csv", ... },
//     "stages": ["lowercase", "remove-numbers", ...],
//     "rows": 1200,
//     "counts": { "tokens": 18345, "types": 2410, ... },
//     "top_words": [{ "word": "pot", "count": 312 }, ...],
//     "artifacts": { "text": "...", "bow": "...", "summary": "..." }
//   }

use std::path::PathBuf;

use serde::Serialize;

use crate::analysis::bag_of_words::WordCount;
use crate::analysis::token_accountant::CountSummary;
use crate::application::preprocess_use_case::PreprocessConfig;

/// How many of the most frequent words the summary lists.
pub const SUMMARY_TOP_WORDS: usize = 10;

#[derive(Debug, Clone, Serialize)]
pub struct ArtifactPaths {
    pub text:    PathBuf,
    pub bow:     PathBuf,
    pub summary: PathBuf,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub timestamp: String,
    pub arguments: Vec<String>,
    pub config:    PreprocessConfig,
    pub stages:    Vec<&'static str>,
    pub rows:      usize,
    pub counts:    CountSummary,
    pub top_words: Vec<WordCount>,
    pub artifacts: ArtifactPaths,
}
