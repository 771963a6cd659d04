// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain structs, enums and traits that describe a run:
// the table, the column being cleaned, the options that
// shape the pipeline, and the errors that can stop it.
//
// Rules for this layer:
//   - NO file I/O
//   - NO linguistic resources (stopwords, stemmers)
//   - Only data types and the traits other layers implement
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// Error taxonomy shared by every layer
pub mod error;

// Closed enumerations for run options
pub mod options;

// The in-memory dataset and its text column
pub mod record_table;

// Core abstractions (traits) that other layers implement
pub mod traits;
