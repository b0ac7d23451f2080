//! Grid to ordered value sequence.

use crate::grid::Grid;

/// Flatten a grid into the ordered sequence the extractor scans.
///
/// Columns are concatenated in column order, each in row order, with empty
/// cells dropped. A single-column grid is therefore just that column. Values
/// that were adjacent across columns in the sheet are not adjacent here.
#[must_use]
pub fn flatten(grid: &Grid) -> Vec<String> {
    (0..grid.width())
        .flat_map(|idx| grid.column(idx).filter_map(crate::CellValue::to_text))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CellValue;

    #[test]
    fn single_column_keeps_row_order() {
        let grid = Grid::new(
            vec!["Data".to_string()],
            vec![
                vec![CellValue::from("ASIN")],
                vec![CellValue::Empty],
                vec![CellValue::from(" B001 ")],
                vec![CellValue::from("  ")],
                vec![CellValue::from("SKU")],
            ],
        );
        assert_eq!(flatten(&grid), vec!["ASIN", "B001", "SKU"]);
    }

    #[test]
    fn multiple_columns_concatenate_column_by_column() {
        let grid = Grid::new(
            vec!["A".to_string(), "B".to_string()],
            vec![
                vec![CellValue::from("ASIN"), CellValue::from("SKU")],
                vec![CellValue::from("B001"), CellValue::from("S1")],
            ],
        );
        assert_eq!(flatten(&grid), vec!["ASIN", "B001", "SKU", "S1"]);
    }

    #[test]
    fn typed_cells_are_stringified() {
        let grid = Grid::new(
            vec!["A".to_string()],
            vec![
                vec![CellValue::Int(12)],
                vec![CellValue::Float(3.0)],
                vec![CellValue::Bool(false)],
            ],
        );
        assert_eq!(flatten(&grid), vec!["12", "3", "false"]);
    }

    #[test]
    fn empty_grid_flattens_to_nothing() {
        assert!(flatten(&Grid::default()).is_empty());
    }
}
