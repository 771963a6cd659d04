// ============================================================
// Layer 5 — Token Accountant
// ============================================================
// Counts tokens and types over the cleaned column.
//
//   token — every whitespace-delimited word occurrence
//   type  — each distinct token, counted once
//
// The counts come back as a TokenCounts value instead of
// living as mutable fields on some long-lived object, so a
// caller always knows exactly which column they describe.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::record_table::TextColumn;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenCounts {
    /// One key per type.
    frequencies: HashMap<String, usize>,
    total:       usize,
}

impl TokenCounts {
    /// Record one occurrence of `token`.
    fn observe(&mut self, token: &str) {
        *self.frequencies.entry(token.to_string()).or_insert(0) += 1;
        self.total += 1;
    }

    #[cfg(test)]
    pub fn frequencies(&self) -> &HashMap<String, usize> {
        &self.frequencies
    }

    #[cfg(test)]
    pub fn frequency(&self, token: &str) -> usize {
        self.frequencies.get(token).copied().unwrap_or(0)
    }

    pub fn token_count(&self) -> usize {
        self.total
    }

    pub fn type_count(&self) -> usize {
        self.frequencies.len()
    }

    /// Distinct tokens per token; 0.0 for an empty column.
    pub fn type_token_ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.type_count() as f64 / self.total as f64
        }
    }

    pub fn summary(&self) -> CountSummary {
        CountSummary {
            tokens:           self.token_count(),
            types:            self.type_count(),
            type_token_ratio: self.type_token_ratio(),
        }
    }
}

/// The scalar part of TokenCounts, for logs and the run summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CountSummary {
    pub tokens:           usize,
    pub types:            usize,
    pub type_token_ratio: f64,
}

/// Walk every row of the column and count its tokens.
pub fn count_tokens(column: &TextColumn) -> TokenCounts {
    let mut counts = TokenCounts::default();
    for token in column.tokens() {
        counts.observe(token);
    }
    tracing::debug!(
        "Counted {} tokens, {} types",
        counts.token_count(),
        counts.type_count()
    );
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_tokens_and_types() {
        let col: TextColumn = ["pot lid pot", "", "lid  handle"].into_iter().collect();
        let counts = count_tokens(&col);

        assert_eq!(counts.token_count(), 5);
        assert_eq!(counts.type_count(), 3);
        assert_eq!(counts.frequency("pot"), 2);
        assert_eq!(counts.frequency("lid"), 2);
        assert_eq!(counts.frequency("missing"), 0);
    }

    #[test]
    fn test_frequency_sum_matches_split_count() {
        let col: TextColumn = ["a b c", "a  a", " b "].into_iter().collect();
        let counts = count_tokens(&col);
        let split_total: usize = col.values().iter().map(|v| v.split_whitespace().count()).sum();

        assert_eq!(counts.frequencies().values().sum::<usize>(), split_total);
        assert_eq!(counts.token_count(), split_total);
        assert_eq!(counts.type_count(), counts.frequencies().len());
    }

    #[test]
    fn test_empty_column() {
        let counts = count_tokens(&TextColumn::default());
        assert_eq!(counts.token_count(), 0);
        assert_eq!(counts.type_token_ratio(), 0.0);
    }
}
