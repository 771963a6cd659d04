// ============================================================
// Layer 2 — PreprocessUseCase
// ============================================================
// Orchestrates one pre-processing run, in order:
//
//   Step 1: Prepare output directory   (Layer 6 - infra)
//   Step 2: Load the dataset            (Layer 4 - data)
//   Step 3: Lift out the text column    (Layer 3 - domain)
//   Step 4: Run the transform pipeline  (Layer 4 - data)
//   Step 5: Build the bag of words      (Layer 5 - analysis)
//   Step 6: Count tokens and types      (Layer 5 - analysis)
//   Step 7: Write artifacts + summary   (Layer 6 - infra)
//
// Any failure aborts the run; nothing is retried.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::analysis::bag_of_words::BagOfWords;
use crate::analysis::token_accountant::count_tokens;
use crate::data::loader::CsvLoader;
use crate::data::pipeline::{PipelineOptions, TransformPipeline};
use crate::domain::error::PreprocessError;
use crate::domain::options::InputEncoding;
use crate::domain::traits::RecordSource;
use crate::infra::artifacts::ArtifactWriter;
use crate::infra::run_summary::{ArtifactPaths, RunSummary, SUMMARY_TOP_WORDS};

pub const DEFAULT_INPUT: &str = "data.csv";
pub const DEFAULT_COLUMN: &str = "Description: (Collection Details)/Description";
pub const DEFAULT_OUTPUT_DIR: &str = "output";

// ─── Run Configuration ───────────────────────────────────────────────────────
// Fully resolved settings for one run. Built from the CLI,
// recorded verbatim in the run summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreprocessConfig {
    pub input:      PathBuf,
    pub column:     String,
    pub encoding:   InputEncoding,
    pub output_dir: PathBuf,
    #[serde(flatten)]
    pub pipeline:   PipelineOptions,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            input:      PathBuf::from(DEFAULT_INPUT),
            column:     DEFAULT_COLUMN.to_string(),
            encoding:   InputEncoding::default(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            pipeline:   PipelineOptions::default(),
        }
    }
}

// ─── PreprocessUseCase ────────────────────────────────────────────────────────
pub struct PreprocessUseCase {
    config:    PreprocessConfig,
    /// Raw invocation arguments, without the program name.
    arguments: Vec<String>,
}

impl PreprocessUseCase {
    pub fn new(config: PreprocessConfig, arguments: Vec<String>) -> Self {
        Self { config, arguments }
    }

    /// Execute the run end to end and return its summary.
    pub fn execute(&self) -> Result<RunSummary> {
        let cfg = &self.config;

        let pipeline = TransformPipeline::new(cfg.pipeline)
            .context("Cannot build transform pipeline")?;

        // ── Step 1: Output directory and run timestamp ───────────────────────
        let writer = ArtifactWriter::new(&cfg.output_dir, &self.arguments)?;
        tracing::info!(
            "Run {} writing to '{}'",
            writer.timestamp(),
            writer.dir().display()
        );

        // ── Step 2: Load the dataset ─────────────────────────────────────────
        let loader = CsvLoader::new(&cfg.input, cfg.encoding);
        let table = loader.load()?;

        // ── Step 3: Text column ──────────────────────────────────────────────
        // The only place a missing column is detected.
        let mut column = table.text_column(&cfg.column).ok_or_else(|| {
            PreprocessError::input(&cfg.input, format!("required column '{}' not found", cfg.column))
        })?;

        // ── Step 4: Clean ────────────────────────────────────────────────────
        tracing::info!("Pipeline: {}", pipeline.stage_names().join(" → "));
        pipeline.run(&mut column);

        // ── Step 5 + 6: Bag of words, token/type counts ──────────────────────
        let bow = BagOfWords::from_column(&column);
        let counts = count_tokens(&column);
        debug_assert_eq!(bow.total(), counts.token_count());
        tracing::info!(
            "{} tokens, {} types (type/token ratio {:.4})",
            counts.token_count(),
            counts.type_count(),
            counts.type_token_ratio()
        );

        // ── Step 7: Artifacts ────────────────────────────────────────────────
        let bow_path = writer.write_bow(&bow)?;
        let text_path = writer.write_text_column(&column)?;

        let summary = RunSummary {
            timestamp: writer.timestamp().to_string(),
            arguments: self.arguments.clone(),
            config:    cfg.clone(),
            stages:    pipeline.stage_names(),
            rows:      column.len(),
            counts:    counts.summary(),
            top_words: bow.top(SUMMARY_TOP_WORDS).to_vec(),
            artifacts: ArtifactPaths {
                text:    text_path,
                bow:     bow_path,
                summary: writer.summary_path(),
            },
        };
        writer.write_json(&summary.artifacts.summary, &summary)?;

        Ok(summary)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::options::WordNormalization;
    use std::fs;
    use tempfile::tempdir;

    fn config(dir: &std::path::Path, csv: &str, pipeline: PipelineOptions) -> PreprocessConfig {
        let input = dir.join("data.csv");
        fs::write(&input, csv).unwrap();
        PreprocessConfig {
            input,
            column: "text".to_string(),
            encoding: InputEncoding::Latin1,
            output_dir: dir.join("output"),
            pipeline,
        }
    }

    #[test]
    fn test_end_to_end_default_flags() {
        let dir = tempdir().unwrap();
        let cfg = config(
            dir.path(),
            "id,text\n1,\"Item: 59-4-2-25, damaged.\"\n2,\n3,Damaged item\n",
            PipelineOptions::default(),
        );
        let summary = PreprocessUseCase::new(cfg, vec![]).execute().unwrap();

        assert_eq!(summary.rows, 3);
        assert_eq!(summary.counts.tokens, 4);
        assert_eq!(summary.counts.types, 2);

        let text = fs::read_to_string(&summary.artifacts.text).unwrap();
        assert_eq!(text, "0,item damaged\n1,\n2,damaged item\n");
        assert!(summary.artifacts.text.to_string_lossy().ends_with("[].txt"));

        let bow = fs::read_to_string(&summary.artifacts.bow).unwrap();
        assert_eq!(bow, "word,count\ndamaged,2\nitem,2\n");

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&summary.artifacts.summary).unwrap()).unwrap();
        assert_eq!(json["counts"]["tokens"], 4);
        assert_eq!(json["config"]["normalization"], "none");
    }

    #[test]
    fn test_end_to_end_lemma() {
        let dir = tempdir().unwrap();
        let cfg = config(
            dir.path(),
            "text\ncats running\ncat runs\n",
            PipelineOptions {
                normalization: WordNormalization::Lemmatize,
                ..PipelineOptions::default()
            },
        );
        let args = vec!["--lemma".to_string()];
        let summary = PreprocessUseCase::new(cfg, args).execute().unwrap();

        let text = fs::read_to_string(&summary.artifacts.text).unwrap();
        assert_eq!(text, "0,cat running\n1,cat run\n");
        assert!(summary.artifacts.text.to_string_lossy().ends_with("['--lemma'].txt"));
        assert_eq!(summary.top_words[0].word, "cat");
        assert_eq!(summary.top_words[0].count, 2);
    }

    #[test]
    fn test_missing_column_fails_with_input_error() {
        let dir = tempdir().unwrap();
        let cfg = config(dir.path(), "body\nx\n", PipelineOptions::default());
        let err = PreprocessUseCase::new(cfg, vec![]).execute().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PreprocessError>(),
            Some(PreprocessError::Input { .. })
        ));
        assert!(err.to_string().contains("required column 'text' not found"));
    }

    #[test]
    fn test_unwritable_output_dir_fails_with_io_error() {
        let dir = tempdir().unwrap();
        let mut cfg = config(dir.path(), "text\nx\n", PipelineOptions::default());
        // a regular file where the output directory should go
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        cfg.output_dir = blocker.join("output");

        let err = PreprocessUseCase::new(cfg, vec![]).execute().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PreprocessError>(),
            Some(PreprocessError::Io { .. })
        ));
    }
}
