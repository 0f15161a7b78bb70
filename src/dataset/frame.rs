//! Raw CSV table with string cells.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Serialize;

use crate::dataset::error::DatasetError;

/// File name offered when the table is downloaded.
pub const DOWNLOAD_FILE_NAME: &str = "ds1.csv";

/// Headed CSV table, cells kept verbatim in header order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// Shape and column names of a frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetDetails {
    pub rows: usize,
    pub columns: usize,
    pub column_names: Vec<String>,
}

/// A window of rows for table inspection
#[derive(Debug, Clone, Serialize)]
pub struct FramePage<'a> {
    pub headers: &'a [String],
    pub offset: usize,
    pub total_rows: usize,
    pub rows: &'a [Vec<String>],
}

impl Frame {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        let file = File::open(path).map_err(|e| DatasetError::from_io(path, e))?;
        Self::from_reader(BufReader::new(file))
    }

    /// Short rows are padded with empty cells up to the header width.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows: Vec<Vec<String>> = Vec::new();
        for record in reader.records() {
            let mut row: Vec<String> = record?.iter().map(str::to_string).collect();
            if row.len() < headers.len() {
                row.resize(headers.len(), String::new());
            }
            rows.push(row);
        }

        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn details(&self) -> DatasetDetails {
        DatasetDetails {
            rows: self.rows.len(),
            columns: self.headers.len(),
            column_names: self.headers.clone(),
        }
    }

    /// Required column names absent from the header, in `required` order.
    pub fn missing_columns(&self, required: &[&str]) -> Vec<String> {
        required
            .iter()
            .filter(|name| self.column_index(name).is_none())
            .map(|name| name.to_string())
            .collect()
    }

    pub fn page(&self, offset: usize, limit: usize) -> FramePage<'_> {
        let start = offset.min(self.rows.len());
        let end = start.saturating_add(limit).min(self.rows.len());
        FramePage {
            headers: &self.headers,
            offset: start,
            total_rows: self.rows.len(),
            rows: &self.rows[start..end],
        }
    }

    /// Re-encode the table as CSV.
    pub fn to_csv_bytes(&self) -> Result<Vec<u8>, DatasetError> {
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(Vec::new());
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.into_inner().map_err(|e| DatasetError::Io(e.into_error()))
    }
}
