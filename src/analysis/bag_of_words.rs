// ============================================================
// Layer 5 — Bag of Words
// ============================================================
// A frequency table over the cleaned column, built on its
// own (not derived from TokenCounts) and frozen once sorted.
//
// Sort order:
//   1. count, highest first
//   2. token, ascending byte order (so ties are deterministic)
//
// Serialised as CSV:
//   word,count
//   pot,12
//   lid,7
//   ...

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::record_table::TextColumn;

/// One row of the bag-of-words table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word:  String,
    pub count: usize,
}

/// Sorted, immutable bag-of-words table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BagOfWords {
    entries: Vec<WordCount>,
}

impl BagOfWords {
    pub fn from_column(column: &TextColumn) -> Self {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for token in column.tokens() {
            *counts.entry(token).or_insert(0) += 1;
        }

        let mut entries: Vec<WordCount> = counts
            .into_iter()
            .map(|(word, count)| WordCount {
                word: word.to_string(),
                count,
            })
            .collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));

        Self { entries }
    }

    pub fn entries(&self) -> &[WordCount] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Sum of all counts, i.e. the number of tokens.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// The `n` most frequent words.
    pub fn top(&self, n: usize) -> &[WordCount] {
        &self.entries[..n.min(self.entries.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token_accountant::count_tokens;

    fn column() -> TextColumn {
        ["pot lid pot", "handle", "lid pot", "", "base"].into_iter().collect()
    }

    #[test]
    fn test_sorted_by_count_then_word() {
        let bow = BagOfWords::from_column(&column());
        let words: Vec<_> = bow.entries().iter().map(|e| (e.word.as_str(), e.count)).collect();
        assert_eq!(words, vec![("pot", 3), ("lid", 2), ("base", 1), ("handle", 1)]);
    }

    #[test]
    fn test_counts_non_increasing() {
        let bow = BagOfWords::from_column(&column());
        assert!(bow.entries().windows(2).all(|w| w[0].count >= w[1].count));
    }

    #[test]
    fn test_total_matches_accountant() {
        let col = column();
        let bow = BagOfWords::from_column(&col);
        let counts = count_tokens(&col);
        assert_eq!(bow.total(), counts.token_count());
        assert_eq!(bow.len(), counts.type_count());
    }

    #[test]
    fn test_top_is_clamped() {
        let bow = BagOfWords::from_column(&column());
        assert_eq!(bow.top(1)[0].word, "pot");
        assert_eq!(bow.top(100).len(), 4);
    }
}
