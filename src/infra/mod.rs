// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Everything that touches the output directory:
//
//   artifacts.rs   — timestamped file naming, CSV writers for
//                    the bag-of-words table and the cleaned
//                    column, JSON writer for the summary.
//
//   run_summary.rs — the serialisable record of a run
//                    (config, counts, top words, file paths).
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

/// Output directory and artifact writers
pub mod artifacts;

/// JSON run summary
pub mod run_summary;
