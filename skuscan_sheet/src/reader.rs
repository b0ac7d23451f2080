//! Workbook reading with calamine.

use calamine::{Data, Range, Reader, open_workbook_auto};
use skuscan_core::{CellValue, Grid};
use std::path::Path;
use tracing::{debug, info};

use crate::error::{Result, SheetError};

/// Read the first worksheet of an `.xlsx`/`.xls` workbook into a grid.
///
/// Other worksheets are ignored.
pub fn read_grid(path: &Path, header_row: bool) -> Result<Grid> {
    let mut workbook = open_workbook_auto(path).map_err(|source| SheetError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let sheet_names = workbook.sheet_names();
    debug!("Worksheets: {:?}", sheet_names);

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| SheetError::NoWorksheet(path.to_path_buf()))?
        .map_err(|source| SheetError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let grid = grid_from_range(&range, header_row);
    info!(
        "Read worksheet {:?}: {} rows x {} columns",
        sheet_names.first().map_or("", String::as_str),
        grid.height(),
        grid.width()
    );

    Ok(grid)
}

/// Convert a calamine range into a grid.
#[must_use]
pub fn grid_from_range(range: &Range<Data>, header_row: bool) -> Grid {
    let rows: Vec<Vec<CellValue>> = range
        .rows()
        .map(|row| row.iter().map(cell_value).collect())
        .collect();

    if header_row {
        Grid::with_header_row(rows)
    } else {
        Grid::without_header_row(rows)
    }
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(_) => CellValue::DateTime(cell.to_string()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::DateTime(s.clone()),
        Data::Error(e) => CellValue::Error(e.to_string()),
    }
}
