// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses the command line with clap, resolves it into a
// PreprocessConfig, and hands off to Layer 2. Prints a short
// report when the run finishes.
//
// Flag conflicts are caught here, before any file is opened.

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::PreprocessArgs;

use crate::application::preprocess_use_case::{PreprocessConfig, PreprocessUseCase};

#[derive(Parser, Debug)]
#[command(
    name = "textprep",
    version,
    args_override_self = true,
    about = "Clean one text column of a CSV file and count its words. \
             Optional stopword removal, stemming or lemmatization; \
             stemming and lemmatization are mutually exclusive."
)]
pub struct Cli {
    #[command(flatten)]
    pub args: PreprocessArgs,
}

impl Cli {
    /// Resolve flags into a config. Stem + lemma is an error.
    pub fn config(&self) -> Result<PreprocessConfig> {
        Ok(PreprocessConfig::try_from(self.args.clone())?)
    }

    /// `arguments` are the raw invocation arguments without the
    /// program name; they end up in the output file name.
    pub fn run(self, arguments: Vec<String>) -> Result<()> {
        let config = self.config()?;
        tracing::debug!("Resolved config: {:?}", config);

        let summary = PreprocessUseCase::new(config, arguments).execute()?;

        println!(
            "Processed {} rows: {} tokens, {} types.",
            summary.rows, summary.counts.tokens, summary.counts.types
        );
        println!("  text:    {}", summary.artifacts.text.display());
        println!("  bow:     {}", summary.artifacts.bow.display());
        println!("  summary: {}", summary.artifacts.summary.display());
        Ok(())
    }
}
