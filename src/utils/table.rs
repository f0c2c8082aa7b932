//! Fixed-width table rendering for CLI listings.

use crate::utils::colors::paint_banner;
use crate::utils::formatting::fit;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
        }
    }
}

/// Renders a styled header line and plain data lines, one line at a time,
/// so rows can be streamed straight from disk.
pub struct Table {
    pub columns: Vec<Column>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    pub fn header(&self) -> String {
        let mut line = String::new();
        for col in &self.columns {
            line.push_str(&fit(&col.header, col.width));
        }
        paint_banner(&line)
    }

    /// Missing trailing cells render as blanks; extra cells are ignored.
    pub fn row(&self, cells: &[String]) -> String {
        let mut line = String::new();
        for (i, col) in self.columns.iter().enumerate() {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            line.push_str(&fit(cell, col.width));
        }
        line
    }
}
