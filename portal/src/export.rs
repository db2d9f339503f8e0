//! CSV table export
//!
//! Every row, header cells included, becomes one comma-joined line of the
//! cells' rendered text. Cells are not quoted or escaped: a comma or newline
//! inside a cell ends up verbatim in the output.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::PortalError;

pub const CSV_MIME_TYPE: &str = "text/csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    Header,
    Data,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableCell {
    pub kind: CellKind,
    /// Text as rendered on the page
    pub text: String,
}

impl TableCell {
    pub fn header(text: impl Into<String>) -> Self {
        Self {
            kind: CellKind::Header,
            text: text.into(),
        }
    }

    pub fn data(text: impl Into<String>) -> Self {
        Self {
            kind: CellKind::Data,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub id: String,
    pub rows: Vec<Vec<TableCell>>,
}

impl Table {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            rows: Vec::new(),
        }
    }

    pub fn with_row(mut self, cells: Vec<TableCell>) -> Self {
        self.rows.push(cells);
        self
    }

    pub fn to_csv(&self) -> String {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.text.as_str())
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A file handed to the user for download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvDownload {
    pub filename: String,
    pub mime_type: &'static str,
    pub contents: String,
}

impl CsvDownload {
    /// Write into `dir` under the download's filename.
    ///
    /// Only the final path component of the filename is used.
    pub fn save_to(&self, dir: &Path) -> Result<PathBuf, PortalError> {
        let name = Path::new(&self.filename)
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "export.csv".into());
        let path = dir.join(name);
        std::fs::write(&path, &self.contents)?;
        tracing::info!(path = %path.display(), bytes = self.contents.len(), "csv exported");
        Ok(path)
    }
}

/// Export the table with `table_id`; `None` when no such table is on the page
pub fn export_table_to_csv(tables: &[Table], table_id: &str, filename: &str) -> Option<CsvDownload> {
    let table = tables.iter().find(|t| t.id == table_id)?;
    Some(CsvDownload {
        filename: filename.to_string(),
        mime_type: CSV_MIME_TYPE,
        contents: table.to_csv(),
    })
}
