// ============================================================
// Layer 4 — English Stopword List
// ============================================================
// The fixed English stoplist distributed with the NLTK
// stopwords corpus (179 entries), embedded so a run never
// needs a network download.
//
// Entries with apostrophes ("don't", "it's") can only match
// text that still contains apostrophes. Punctuation removal
// runs first, so in practice the bare forms ("don", "s", "t")
// are the ones that fire.

use std::collections::HashSet;

pub const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

/// Lookup set over the stoplist.
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: HashSet<&'static str>,
}

impl StopwordSet {
    pub fn english() -> Self {
        Self {
            words: ENGLISH_STOPWORDS.iter().copied().collect(),
        }
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word.to_lowercase().as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_has_no_duplicates() {
        assert_eq!(StopwordSet::english().words.len(), ENGLISH_STOPWORDS.len());
        assert_eq!(ENGLISH_STOPWORDS.len(), 179);
    }

    #[test]
    fn test_case_insensitive() {
        let s = StopwordSet::english();
        assert!(s.contains("The"));
        assert!(s.contains("and"));
        assert!(!s.contains("museum"));
    }
}
