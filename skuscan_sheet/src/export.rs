//! Rendering and writing extracted records.

use skuscan_config::{ExportFormat, OutputConfig};
use skuscan_core::ProductRecord;
use std::path::PathBuf;
use tracing::info;
use uuid::Uuid;

use crate::error::Result;

const CSV_HEADER: [&str; 3] = ["ASIN", "SKU", "FNSKU"];
const UTF8_BOM: char = '\u{feff}';

/// Render records as CSV with an `ASIN,SKU,FNSKU` header.
#[must_use]
pub fn render_csv(records: &[ProductRecord], utf8_bom: bool) -> String {
    let mut contents = String::new();
    if utf8_bom {
        contents.push(UTF8_BOM);
    }

    push_csv_row(&mut contents, &CSV_HEADER);
    for record in records {
        push_csv_row(
            &mut contents,
            &[record.asin.as_str(), record.sku.as_str(), record.fnsku.as_str()],
        );
    }

    contents
}

/// Render records as a pretty-printed JSON array.
pub fn render_json(records: &[ProductRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// `<prefix>_<8 hex chars>.<ext>`
#[must_use]
pub fn export_file_name(prefix: &str, format: ExportFormat) -> String {
    let id = Uuid::now_v7().simple().to_string();
    // The tail of a v7 UUID is random; the head is a timestamp.
    let suffix = &id[id.len() - 8..];
    format!("{prefix}_{suffix}.{}", format.extension())
}

/// Write `records` into `output.directory` and return the file path.
pub fn write_export(records: &[ProductRecord], output: &OutputConfig) -> Result<PathBuf> {
    let contents = match output.format {
        ExportFormat::Csv => render_csv(records, output.utf8_bom),
        ExportFormat::Json => render_json(records)?,
    };

    std::fs::create_dir_all(&output.directory)?;
    let path = output
        .directory
        .join(export_file_name(&output.file_prefix, output.format));
    std::fs::write(&path, contents)?;

    info!("Wrote {} records to {}", records.len(), path.display());
    Ok(path)
}

fn push_csv_row(contents: &mut String, fields: &[&str]) {
    for (idx, field) in fields.iter().enumerate() {
        if idx > 0 {
            contents.push(',');
        }
        push_csv_field(contents, field);
    }
    contents.push('\n');
}

fn push_csv_field(contents: &mut String, field: &str) {
    if field.contains([',', '"', '\n', '\r']) {
        contents.push('"');
        contents.push_str(&field.replace('"', "\"\""));
        contents.push('"');
    } else {
        contents.push_str(field);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_has_bom_and_header() {
        let csv = render_csv(&[ProductRecord::new("B001", "S1", "F1")], true);
        assert_eq!(csv, "\u{feff}ASIN,SKU,FNSKU\nB001,S1,F1\n");
    }

    #[test]
    fn csv_without_bom() {
        let csv = render_csv(&[ProductRecord::new("B001", "", "")], false);
        assert_eq!(csv, "ASIN,SKU,FNSKU\nB001,,\n");
    }

    #[test]
    fn csv_quotes_special_fields() {
        let csv = render_csv(
            &[ProductRecord::new("B,1", "say \"hi\"", "line\nbreak")],
            false,
        );
        assert_eq!(
            csv,
            "ASIN,SKU,FNSKU\n\"B,1\",\"say \"\"hi\"\"\",\"line\nbreak\"\n"
        );
    }

    #[test]
    fn csv_keeps_non_ascii() {
        let csv = render_csv(&[ProductRecord::new("B001", "商品-01", "")], false);
        assert!(csv.contains("商品-01"));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn json_uses_label_names() {
        let json = render_json(&[ProductRecord::new("B001", "S1", "")]).expect("json should render");
        let value: serde_json::Value = serde_json::from_str(&json).expect("json should parse");
        assert_eq!(value[0]["ASIN"], "B001");
        assert_eq!(value[0]["SKU"], "S1");
        assert_eq!(value[0]["FNSKU"], "");
    }

    #[test]
    fn file_name_shape() {
        let name = export_file_name("extracted_data", ExportFormat::Csv);
        let suffix = name
            .strip_prefix("extracted_data_")
            .and_then(|rest| rest.strip_suffix(".csv"));
        assert!(suffix.is_some_and(|s| s.len() == 8 && s.chars().all(|c| c.is_ascii_hexdigit())));
    }

    #[test]
    fn file_names_differ() {
        assert_ne!(
            export_file_name("x", ExportFormat::Json),
            export_file_name("x", ExportFormat::Json)
        );
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn write_export_creates_directory() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let output = OutputConfig {
            directory: dir.path().join("nested/out"),
            ..OutputConfig::default()
        };

        let path = write_export(&[ProductRecord::new("B001", "S1", "F1")], &output)
            .expect("export should be written");

        assert!(path.starts_with(dir.path().join("nested/out")));
        let contents = std::fs::read_to_string(&path).expect("export should be readable");
        assert_eq!(contents, "\u{feff}ASIN,SKU,FNSKU\nB001,S1,F1\n");
    }
}
