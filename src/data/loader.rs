// ============================================================
// Layer 4 — Dataset Loader
// ============================================================
// Loads a CSV file into a RecordTable using the csv crate.
//
// Two things make this more than `csv::Reader::deserialize`:
//
//   1. Encoding. Collection exports are usually Latin-1, so
//      fields are read as raw bytes and decoded here. Latin-1
//      is a direct byte → code point mapping, so it can never
//      fail. UTF-8 is also supported and fails on bad bytes.
//
//   2. Missing values. Empty cells, short rows, and the usual
//      spreadsheet NA markers ("NaN", "N/A", "null", ...) all
//      become the empty string, so every transform downstream
//      only ever sees text.
//
// Reference: csv crate documentation (ByteRecord, flexible readers)
//            Rust Book §9 (Error Handling)

use std::fs::File;
use std::path::PathBuf;

use csv::{ByteRecord, ReaderBuilder};

use crate::domain::error::{PreprocessError, PreprocessResult};
use crate::domain::options::InputEncoding;
use crate::domain::record_table::RecordTable;
use crate::domain::traits::RecordSource;

/// Cell values treated as missing, in addition to the empty cell.
const NA_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Loads a CSV dataset. Column lookup is left to `RecordTable::text_column`.
pub struct CsvLoader {
    path:     PathBuf,
    encoding: InputEncoding,
}

impl CsvLoader {
    pub fn new(path: impl Into<PathBuf>, encoding: InputEncoding) -> Self {
        Self {
            path: path.into(),
            encoding,
        }
    }

    fn decode(&self, bytes: &[u8]) -> PreprocessResult<String> {
        match self.encoding {
            InputEncoding::Latin1 => Ok(bytes.iter().map(|&b| b as char).collect()),
            InputEncoding::Utf8 => std::str::from_utf8(bytes)
                .map(str::to_owned)
                .map_err(|e| PreprocessError::input(&self.path, format!("invalid UTF-8: {e}"))),
        }
    }

    fn decode_record(&self, record: &ByteRecord) -> PreprocessResult<Vec<String>> {
        record
            .iter()
            .map(|field| self.decode(field).map(fill_missing))
            .collect()
    }
}

impl RecordSource for CsvLoader {
    fn load(&self) -> PreprocessResult<RecordTable> {
        let file = File::open(&self.path).map_err(|e| PreprocessError::input(&self.path, e))?;

        let mut reader = ReaderBuilder::new().flexible(true).from_reader(file);

        let headers: Vec<String> = reader
            .byte_headers()
            .map_err(|e| PreprocessError::input(&self.path, e))?
            .iter()
            .map(|h| self.decode(h))
            .collect::<PreprocessResult<_>>()?;
        // A UTF-8 BOM would otherwise stick to the first header name
        let headers: Vec<String> = headers
            .into_iter()
            .enumerate()
            .map(|(i, h)| if i == 0 { h.trim_start_matches('\u{feff}').to_string() } else { h })
            .collect();

        let width = headers.len();
        let mut rows = Vec::new();
        let mut record = ByteRecord::new();

        while reader
            .read_byte_record(&mut record)
            .map_err(|e| PreprocessError::input(&self.path, e))?
        {
            let row = self.decode_record(&record)?;
            if row.len() != width {
                tracing::warn!(
                    "Row {} has {} fields, header has {}",
                    rows.len(),
                    row.len(),
                    width
                );
            }
            rows.push(row);
        }

        tracing::info!(
            "Loaded {} rows ({} columns) from '{}'",
            rows.len(),
            width,
            self.path.display()
        );
        Ok(RecordTable::new(headers, rows))
    }
}

/// Map NA markers to the empty string, pass everything else through.
fn fill_missing(value: String) -> String {
    if NA_MARKERS.contains(&value.as_str()) {
        String::new()
    } else {
        value
    }
}
