use serde::{Deserialize, Serialize};

/// One product extracted from a sheet.
///
/// `sku` and `fnsku` are empty when no label was found near the ASIN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(rename = "ASIN")]
    pub asin: String,
    #[serde(rename = "SKU")]
    pub sku: String,
    #[serde(rename = "FNSKU")]
    pub fnsku: String,
}

impl ProductRecord {
    #[must_use]
    pub fn new(asin: impl Into<String>, sku: impl Into<String>, fnsku: impl Into<String>) -> Self {
        Self {
            asin: asin.into(),
            sku: sku.into(),
            fnsku: fnsku.into(),
        }
    }

    #[must_use]
    pub fn has_sku(&self) -> bool {
        !self.sku.is_empty()
    }

    #[must_use]
    pub fn has_fnsku(&self) -> bool {
        !self.fnsku.is_empty()
    }
}

/// Counts shown after an extraction run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionSummary {
    pub total: usize,
    pub with_sku: usize,
    pub with_fnsku: usize,
}

impl ExtractionSummary {
    #[must_use]
    pub fn from_records(records: &[ProductRecord]) -> Self {
        Self {
            total: records.len(),
            with_sku: records.iter().filter(|r| r.has_sku()).count(),
            with_fnsku: records.iter().filter(|r| r.has_fnsku()).count(),
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }
}
