use crate::error::{DashboardError, Result};
use csv::{ReaderBuilder, StringRecord};
use std::fs;
use std::path::Path;

/// A CSV export held in memory with its header resolved.
pub struct CsvSource {
    name: String,
    headers: StringRecord,
    records: Vec<StringRecord>,
}

impl CsvSource {
    /// Read and decode a CSV file. A UTF-8 BOM is dropped and malformed byte
    /// sequences are replaced rather than rejected.
    pub fn open(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)?;
        let (text, _) = encoding_rs::UTF_8.decode_with_bom_removal(&bytes);
        Self::from_text(&path.display().to_string(), &text)
    }

    pub fn from_text(name: &str, text: &str) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers = reader.headers()?.clone();
        let records = reader.records().collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            name: name.to_string(),
            headers,
            records,
        })
    }

    /// Position of a required column.
    pub fn column(&self, column: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h.trim() == column)
            .ok_or_else(|| DashboardError::MissingColumn {
                column: column.to_string(),
                file: self.name.clone(),
            })
    }

    pub fn records(&self) -> &[StringRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Cell text, or `None` when the cell is empty or absent from a short row.
pub fn cell(record: &StringRecord, index: usize) -> Option<&str> {
    record.get(index).filter(|v| !v.is_empty())
}

/// Lenient numeric coercion: anything that is not a number becomes missing.
pub fn coerce_number(value: Option<&str>) -> Option<f64> {
    value
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| !v.is_nan())
}
