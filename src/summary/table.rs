use serde::de::DeserializeOwned;
use std::io::Read;
use std::path::Path;

use super::LoadError;

/// A summary table as produced by the analytics pipeline.
///
/// Cells are kept as text so that re-encoding a table yields the same
/// information the source file carried.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Table {
        Table { headers, rows }
    }

    pub fn from_path(path: &Path) -> Result<Table, LoadError> {
        if !path.is_file() {
            return Err(LoadError::Missing(path.to_path_buf()));
        }
        let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Table::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Table, LoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = reader
            .headers()
            .map_err(LoadError::Csv)?
            .iter()
            .map(str::to_owned)
            .collect();
        if headers.is_empty() || (headers.len() == 1 && headers[0].is_empty()) {
            return Err(LoadError::NoHeader);
        }

        // Short rows are padded with empty cells, longer rows are rejected.
        let mut rows = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record.map_err(LoadError::Csv)?;
            if record.len() > headers.len() {
                return Err(LoadError::Schema(format!(
                    "row {}: {} fields, header has {}",
                    index + 1,
                    record.len(),
                    headers.len()
                )));
            }
            let mut row: Vec<String> = record.iter().map(str::to_owned).collect();
            row.resize(headers.len(), String::new());
            rows.push(row);
        }

        Ok(Table { headers, rows })
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

    /// Deserializes every row into `T`, matching fields by header name.
    pub fn deserialize_rows<T: DeserializeOwned>(&self) -> Result<Vec<T>, LoadError> {
        let headers = csv::StringRecord::from(self.headers.clone());
        self.rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                csv::StringRecord::from(row.clone())
                    .deserialize(Some(&headers))
                    .map_err(|err| LoadError::Schema(format!("row {}: {}", index + 1, err)))
            })
            .collect()
    }

    /// Encodes the table as CSV with a header row.
    pub fn to_csv_bytes(&self) -> std::io::Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.into_inner().map_err(|err| err.into_error())
    }
}
