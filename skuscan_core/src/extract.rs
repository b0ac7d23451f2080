//! Label-to-value extraction over a flattened cell sequence.
//!
//! Every `ASIN` label followed by at least one value yields a record. The
//! `SKU` and `FNSKU` labels are looked up independently in bounded windows
//! that both start two cells after the `ASIN` label, and the first hit in each
//! window wins. Windows of neighbouring ASINs may overlap, so the same `SKU`
//! can be attached to more than one record.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::record::ProductRecord;

pub const ASIN_LABEL: &str = "ASIN";
pub const SKU_LABEL: &str = "SKU";
pub const FNSKU_LABEL: &str = "FNSKU";

/// Look-ahead window sizes, measured from the `ASIN` label position.
///
/// A label at index `j` is considered when `i + 2 <= j < i + window`, clamped
/// to the sequence length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractWindows {
    #[serde(default = "ExtractWindows::default_sku")]
    pub sku: usize,
    #[serde(default = "ExtractWindows::default_fnsku")]
    pub fnsku: usize,
}

impl Default for ExtractWindows {
    fn default() -> Self {
        Self {
            sku: Self::default_sku(),
            fnsku: Self::default_fnsku(),
        }
    }
}

impl ExtractWindows {
    const fn default_sku() -> usize {
        8
    }

    const fn default_fnsku() -> usize {
        15
    }
}

/// Scans flattened sequences for ASIN/SKU/FNSKU triads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Extractor {
    windows: ExtractWindows,
}

impl Extractor {
    #[must_use]
    pub const fn new(windows: ExtractWindows) -> Self {
        Self { windows }
    }

    #[must_use]
    pub const fn windows(&self) -> ExtractWindows {
        self.windows
    }

    /// Extract one record per `ASIN` label that has a value after it.
    ///
    /// Never fails; a sequence without labels gives an empty vector.
    #[must_use]
    pub fn extract<S: AsRef<str>>(&self, cells: &[S]) -> Vec<ProductRecord> {
        let mut records = Vec::new();

        for (i, cell) in cells.iter().enumerate() {
            if cell.as_ref() != ASIN_LABEL {
                continue;
            }
            let Some(asin) = cells.get(i + 1) else {
                continue;
            };

            let sku_end = i.saturating_add(self.windows.sku);
            let fnsku_end = i.saturating_add(self.windows.fnsku);
            let sku = find_labeled_value(cells, i + 2, sku_end, SKU_LABEL);
            let fnsku = find_labeled_value(cells, i + 2, fnsku_end, FNSKU_LABEL);

            records.push(ProductRecord::new(
                asin.as_ref(),
                sku.unwrap_or_default(),
                fnsku.unwrap_or_default(),
            ));
        }

        debug!(
            cells = cells.len(),
            records = records.len(),
            "Extraction scan finished"
        );

        records
    }
}

/// Extract records with the default windows.
#[must_use]
pub fn extract_records<S: AsRef<str>>(cells: &[S]) -> Vec<ProductRecord> {
    Extractor::default().extract(cells)
}

/// Value right after the first `label` at an index in `[start, end)`.
///
/// `end` is clamped to the sequence length. A label in the last cell has no
/// value slot and is skipped.
fn find_labeled_value<'a, S: AsRef<str>>(
    cells: &'a [S],
    start: usize,
    end: usize,
    label: &str,
) -> Option<&'a str> {
    let end = end.min(cells.len());

    (start..end)
        .filter(|&j| cells[j].as_ref() == label)
        .find_map(|j| cells.get(j + 1))
        .map(|value| value.as_ref())
}
