//! Scalar cell values as read from a spreadsheet.

use std::fmt;

/// A single scalar read from a source table.
///
/// Readers map their native cell types onto this enum so the flattener never
/// depends on a particular spreadsheet library.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Date/time already rendered by the reader.
    DateTime(String),
    /// Spreadsheet error value such as `#N/A`.
    Error(String),
}

impl CellValue {
    /// Trimmed text of the cell, or `None` when the cell carries nothing.
    ///
    /// Whitespace-only text counts as empty.
    #[must_use]
    pub fn to_text(&self) -> Option<String> {
        let text = match self {
            Self::Empty => return None,
            Self::Text(s) | Self::DateTime(s) | Self::Error(s) => s.trim().to_string(),
            Self::Int(i) => i.to_string(),
            Self::Float(f) => format_float(*f),
            Self::Bool(b) => b.to_string(),
        };

        if text.is_empty() { None } else { Some(text) }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to_text().is_none()
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_text().as_deref().unwrap_or_default())
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

// Spreadsheets store every number as a double; whole numbers display without
// a fractional part.
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_trimmed() {
        assert_eq!(
            CellValue::from("  B00TEST  ").to_text(),
            Some("B00TEST".to_string())
        );
    }

    #[test]
    fn blank_text_is_empty() {
        assert!(CellValue::from("   ").is_empty());
        assert!(CellValue::from("").is_empty());
        assert!(CellValue::Empty.is_empty());
    }

    #[test]
    fn whole_floats_drop_fraction() {
        assert_eq!(CellValue::Float(42.0).to_text(), Some("42".to_string()));
        assert_eq!(CellValue::Float(-3.0).to_text(), Some("-3".to_string()));
        assert_eq!(CellValue::Float(1.5).to_text(), Some("1.5".to_string()));
    }

    #[test]
    fn typed_values_stringify() {
        assert_eq!(CellValue::Int(7).to_text(), Some("7".to_string()));
        assert_eq!(CellValue::Bool(true).to_text(), Some("true".to_string()));
        assert_eq!(
            CellValue::Error("#N/A".to_string()).to_text(),
            Some("#N/A".to_string())
        );
    }

    #[test]
    fn display_of_empty_is_blank() {
        assert_eq!(CellValue::Empty.to_string(), "");
        assert_eq!(CellValue::from(" SKU ").to_string(), "SKU");
    }
}
