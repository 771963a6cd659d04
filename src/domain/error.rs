// ============================================================
// Layer 3 — Error Taxonomy
// ============================================================
// Every failure in a run falls into one of three buckets.
// None of them is recoverable: the use case stops at the
// first error and the binary exits with a non-zero status.
//
//   Configuration — conflicting options (stem + lemma)
//   Input         — dataset missing, unreadable, or lacking the column
//   Io            — output directory / artifact cannot be written
//
// Reference: thiserror crate documentation
//            Rust Book §9 (Recoverable Errors with Result)

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while preparing, running, or writing a pre-processing run.
#[derive(Debug, Error)]
pub enum PreprocessError {
    /// Mutually exclusive options were requested together.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The dataset could not be loaded.
    #[error("input error in '{}': {}", .path.display(), .reason)]
    Input { path: PathBuf, reason: String },

    /// An output artifact could not be created or written.
    #[error("cannot write '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PreprocessError {
    pub fn input(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Input {
            path:   path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Wrap a csv writer failure, keeping the underlying I/O error when there is one.
    pub fn csv_write(path: impl Into<PathBuf>, err: csv::Error) -> Self {
        let source = match err.into_kind() {
            csv::ErrorKind::Io(e) => e,
            other => std::io::Error::new(std::io::ErrorKind::Other, format!("{other:?}")),
        };
        Self::io(path, source)
    }
}

pub type PreprocessResult<T> = Result<T, PreprocessError>;
