//! Two-dimensional table with named columns.

use crate::cell::CellValue;

/// An ordered grid of scalar values with named columns.
///
/// Rows may be ragged; a row shorter than `columns` is padded with
/// [`CellValue::Empty`] when read through [`Grid::column`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Grid {
    #[must_use]
    pub const fn new(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self { columns, rows }
    }

    /// Build a grid whose first row holds the column names.
    ///
    /// Header cells that are blank get positional names (`Column3`).
    #[must_use]
    pub fn with_header_row(mut rows: Vec<Vec<CellValue>>) -> Self {
        if rows.is_empty() {
            return Self::default();
        }

        let header = rows.remove(0);
        let width = rows.iter().map(Vec::len).max().unwrap_or(0).max(header.len());
        let columns = (0..width)
            .map(|idx| {
                header
                    .get(idx)
                    .and_then(CellValue::to_text)
                    .unwrap_or_else(|| positional_name(idx))
            })
            .collect();

        Self { columns, rows }
    }

    /// Build a grid where every row is data and columns are named by position.
    #[must_use]
    pub fn without_header_row(rows: Vec<Vec<CellValue>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let columns = (0..width).map(positional_name).collect();
        Self { columns, rows }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Cells of column `idx` in row order.
    pub fn column(&self, idx: usize) -> impl Iterator<Item = &CellValue> + '_ {
        const EMPTY: &CellValue = &CellValue::Empty;
        self.rows.iter().map(move |row| row.get(idx).unwrap_or(EMPTY))
    }
}

fn positional_name(idx: usize) -> String {
    format!("Column{}", idx + 1)
}
