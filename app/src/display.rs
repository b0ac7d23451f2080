//! Terminal rendering of extraction results.

use skuscan_core::{ExtractionSummary, ProductRecord};

const HEADERS: [&str; 3] = ["ASIN", "SKU", "FNSKU"];

pub fn print_no_data() {
    println!("❌ No ASIN, SKU or FNSKU data found");
    println!("ℹ️  Make sure the sheet contains cells labelled ASIN, SKU and FNSKU, each followed by its value");
}

/// Print the first `limit` records as an aligned table.
pub fn print_preview(records: &[ProductRecord], limit: usize) {
    println!("📋 Preview");
    for line in preview_lines(records, limit) {
        println!("{line}");
    }
}

pub fn print_summary(summary: &ExtractionSummary) {
    println!("Total products: {}", summary.total);
    println!("Valid SKU:      {}", summary.with_sku);
    println!("Valid FNSKU:    {}", summary.with_fnsku);
}

fn preview_lines(records: &[ProductRecord], limit: usize) -> Vec<String> {
    let shown = &records[..limit.min(records.len())];
    let rows: Vec<[&str; 3]> = shown
        .iter()
        .map(|r| [r.asin.as_str(), r.sku.as_str(), r.fnsku.as_str()])
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 3);
    lines.push(format_row(&HEADERS, &widths));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    lines.extend(rows.iter().map(|row| format_row(row, &widths)));

    if records.len() > shown.len() {
        lines.push(format!("... {} more", records.len() - shown.len()));
    }

    lines
}

fn format_row(cells: &[&str; 3], widths: &[usize; 3]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_aligns_columns() {
        let records = vec![
            ProductRecord::new("B001", "LONG-SKU-1", "F1"),
            ProductRecord::new("B002", "", "X001"),
        ];
        let lines = preview_lines(&records, 10);
        assert_eq!(
            lines,
            vec![
                "ASIN  SKU         FNSKU",
                "----  ----------  -----",
                "B001  LONG-SKU-1  F1",
                "B002              X001",
            ]
        );
    }

    #[test]
    fn preview_truncates_to_limit() {
        let records: Vec<_> = (0..5)
            .map(|i| ProductRecord::new(format!("B{i}"), "", ""))
            .collect();
        let lines = preview_lines(&records, 2);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[4], "... 3 more");
    }
}
