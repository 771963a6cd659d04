// ============================================================
// Layer 3 — Record Table and Text Column
// ============================================================
// A RecordTable is the whole dataset held in memory:
// a header row plus one Vec<String> per record, in file order.
//
// Only one column is ever transformed. It is lifted out of
// the table as a TextColumn, which the pipeline mutates in
// place. The position of a value inside the column IS its
// row index, so order must never change:
//
//   row 0 ──► column[0] ──► "0,<cleaned text>"
//   row 1 ──► column[1] ──► "1,<cleaned text>"
//
// Reference: Rust Book §8 (Vectors and Strings)

/// An ordered, in-memory tabular dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordTable {
    headers: Vec<String>,
    rows:    Vec<Vec<String>>,
}

impl RecordTable {
    /// Build a table. Rows shorter than the header are padded with
    /// empty strings so every lookup by column name succeeds.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                if row.len() < width {
                    row.resize(width, String::new());
                }
                row
            })
            .collect();
        Self { headers, rows }
    }

    /// Position of a column by exact header name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Value of `column` in row `row`, if both exist.
    #[cfg(test)]
    pub fn get(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row).map(|r| r[idx].as_str())
    }

    /// Copy one column out as a TextColumn, in row order.
    /// Returns None when the column is not in the header.
    pub fn text_column(&self, name: &str) -> Option<TextColumn> {
        let idx = self.column_index(name)?;
        Some(TextColumn::new(
            self.rows.iter().map(|r| r[idx].clone()).collect(),
        ))
    }
}

/// The designated text column: one string per row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextColumn {
    values: Vec<String>,
}

impl TextColumn {
    pub fn new(values: Vec<String>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[cfg(test)]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Replace every value with `f(value)`.
    /// Length and order are untouched by construction.
    pub fn map_in_place<F>(&mut self, f: F)
    where
        F: Fn(&str) -> String,
    {
        for value in self.values.iter_mut() {
            *value = f(value);
        }
    }

    /// Every whitespace-delimited token in the column, row by row.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.values.iter().flat_map(|v| v.split_whitespace())
    }

    /// (row index, value) pairs in file order.
    pub fn indexed(&self) -> impl Iterator<Item = (usize, &str)> {
        self.values.iter().map(String::as_str).enumerate()
    }
}

impl<S: Into<String>> FromIterator<S> for TextColumn {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RecordTable {
        RecordTable::new(
            vec!["id".into(), "text".into()],
            vec![
                vec!["1".into(), "first".into()],
                vec!["2".into()],
            ],
        )
    }

    #[test]
    fn test_short_rows_are_padded() {
        let t = table();
        assert_eq!(t.get(1, "text"), Some(""));
        assert_eq!(t.rows.len(), 2);
    }

    #[test]
    fn test_text_column_keeps_order() {
        let col = table().text_column("text").unwrap();
        assert_eq!(col.values(), &["first".to_string(), String::new()]);
    }

    #[test]
    fn test_missing_column() {
        assert!(table().text_column("body").is_none());
    }

    #[test]
    fn test_map_in_place_preserves_length() {
        let mut col: TextColumn = ["a b", "", "c"].into_iter().collect();
        col.map_in_place(|_| String::new());
        assert_eq!(col.len(), 3);
    }

    #[test]
    fn test_tokens_skip_empty_values() {
        let col: TextColumn = ["a  b", "", " c "].into_iter().collect();
        assert_eq!(col.tokens().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }
}
