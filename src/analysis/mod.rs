// ============================================================
// Layer 5 — Analysis
// ============================================================
// Read-only passes over the cleaned text column. Neither
// module mutates the column; each returns its own structure.
//
//   token_accountant.rs — token / type counts
//   bag_of_words.rs     — sorted word frequency table

/// Token and type counting
pub mod token_accountant;

/// Sorted bag-of-words table
pub mod bag_of_words;
