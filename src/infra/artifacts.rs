// ============================================================
// Layer 6 — Artifact Writer
// ============================================================
// Writes everything a run produces into the output directory.
// All files share one timestamp, taken when the writer is
// created, so the artifacts of a run sort together:
//
//   output/
//     2024-05-01-14-03-59_bow.csv            ← word,count table
//     2024-05-01-14-03-59['--stop'].txt      ← cleaned column
//     2024-05-01-14-03-59_summary.json       ← run summary
//
// The cleaned column file has no header. Each line is
// "<row index>,<text>", with the text quoted only if it
// contains a comma, quote, or line break.
//
// Reference: csv crate documentation (Writer, WriterBuilder)
//            chrono crate documentation (format strings)

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use chrono::Local;
use csv::{Terminator, WriterBuilder};
use serde::Serialize;

use crate::analysis::bag_of_words::BagOfWords;
use crate::domain::error::{PreprocessError, PreprocessResult};
use crate::domain::record_table::TextColumn;

/// `YYYY-MM-DD-HH-MM-SS`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H-%M-%S";

pub struct ArtifactWriter {
    dir:       PathBuf,
    timestamp: String,
    suffix:    String,
}

impl ArtifactWriter {
    /// Create the output directory (and parents) and stamp the run with local time.
    pub fn new(dir: impl Into<PathBuf>, args: &[String]) -> PreprocessResult<Self> {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        Self::with_timestamp(dir, timestamp, args)
    }

    /// Same as `new` with a caller-chosen timestamp.
    pub fn with_timestamp(
        dir: impl Into<PathBuf>,
        timestamp: impl Into<String>,
        args: &[String],
    ) -> PreprocessResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| PreprocessError::io(&dir, e))?;
        Ok(Self {
            dir,
            timestamp: timestamp.into(),
            suffix: args_suffix(args),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn bow_path(&self) -> PathBuf {
        self.dir.join(format!("{}_bow.csv", self.timestamp))
    }

    pub fn text_path(&self) -> PathBuf {
        self.dir.join(format!("{}{}.txt", self.timestamp, self.suffix))
    }

    pub fn summary_path(&self) -> PathBuf {
        self.dir.join(format!("{}_summary.json", self.timestamp))
    }

    /// Write `word,count` rows, header always present.
    pub fn write_bow(&self, bow: &BagOfWords) -> PreprocessResult<PathBuf> {
        let path = self.bow_path();
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::Any(b'\n'))
            .from_path(&path)
            .map_err(|e| PreprocessError::csv_write(&path, e))?;

        writer
            .write_record(["word", "count"])
            .map_err(|e| PreprocessError::csv_write(&path, e))?;
        for entry in bow.entries() {
            writer
                .serialize(entry)
                .map_err(|e| PreprocessError::csv_write(&path, e))?;
        }
        writer.flush().map_err(|e| PreprocessError::io(&path, e))?;

        tracing::info!("Wrote {} bag-of-words rows to '{}'", bow.len(), path.display());
        Ok(path)
    }

    /// Write `<row index>,<text>` lines, no header.
    pub fn write_text_column(&self, column: &TextColumn) -> PreprocessResult<PathBuf> {
        let path = self.text_path();
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::Any(b'\n'))
            .from_path(&path)
            .map_err(|e| PreprocessError::csv_write(&path, e))?;

        for (index, text) in column.indexed() {
            writer
                .write_record([index.to_string().as_str(), text])
                .map_err(|e| PreprocessError::csv_write(&path, e))?;
        }
        writer.flush().map_err(|e| PreprocessError::io(&path, e))?;

        tracing::info!("Wrote {} cleaned rows to '{}'", column.len(), path.display());
        Ok(path)
    }

    /// Pretty-printed JSON.
    pub fn write_json<T: Serialize>(&self, path: &Path, value: &T) -> PreprocessResult<()> {
        let file = File::create(path).map_err(|e| PreprocessError::io(path, e))?;
        serde_json::to_writer_pretty(file, value)
            .map_err(|e| PreprocessError::io(path, e.into()))?;
        tracing::debug!("Wrote '{}'", path.display());
        Ok(())
    }
}

/// Render the invocation arguments as a bracketed list of quoted
/// strings, e.g. `['--stop', '--stem']`. Path separators are
/// replaced so the suffix stays inside one file name.
pub fn args_suffix(args: &[String]) -> String {
    let quoted: Vec<String> = args
        .iter()
        .map(|a| {
            let a = a.replace(['/', '\\'], "_");
            if a.contains('\'') && !a.contains('"') {
                format!("\"{a}\"")
            } else {
                format!("'{}'", a.replace('\'', "\\'"))
            }
        })
        .collect();
    format!("[{}]", quoted.join(", "))
}
