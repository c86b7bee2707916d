//! Ordered, named-column view over a CSV dataset.

use std::{fs::File, io::Read, path::Path};

use crate::foundation::error::{UvPathError, UvPathResult};

/// Rows of string cells addressed by header name.
///
/// Row order is the order records appear in the source. Rows may be ragged: a cell missing from
/// a short row reads as `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    /// Parse CSV from `reader`. The first record is the header.
    pub fn from_reader<R: Read>(reader: R) -> UvPathResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let columns = rdr.headers()?.iter().map(str::to_owned).collect();
        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_owned).collect());
        }

        Ok(Self { columns, rows })
    }

    pub fn from_path(path: &Path) -> UvPathResult<Self> {
        let f = File::open(path)
            .map_err(|e| UvPathError::io(format!("open dataset '{}'", path.display()), e))?;
        let table = Self::from_reader(std::io::BufReader::new(f))?;
        tracing::debug!(
            path = %path.display(),
            rows = table.len(),
            columns = table.columns.len(),
            "loaded dataset"
        );
        Ok(table)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Position of the first column named exactly `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[String]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }
}
