//! Checks applied to a spreadsheet before it is parsed.

use std::path::{Path, PathBuf};

use crate::error::{Result, SheetError};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// A spreadsheet accepted for extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub path: PathBuf,
    pub name: String,
    pub size_bytes: u64,
}

impl UploadedFile {
    /// Accept `path` if its extension is in `allowed_extensions` and the file
    /// can be stat'ed.
    pub fn inspect(path: &Path, allowed_extensions: &[String]) -> Result<Self> {
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());

        if !has_allowed_extension(path, allowed_extensions) {
            return Err(SheetError::UnsupportedFormat {
                name,
                allowed: allowed_extensions
                    .iter()
                    .map(|ext| format!(".{ext}"))
                    .collect::<Vec<_>>()
                    .join(", "),
            });
        }

        let size_bytes = std::fs::metadata(path)?.len();

        Ok(Self {
            path: path.to_path_buf(),
            name,
            size_bytes,
        })
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn size_mb(&self) -> f64 {
        self.size_bytes as f64 / BYTES_PER_MB
    }
}

fn has_allowed_extension(path: &Path, allowed_extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            allowed_extensions
                .iter()
                .any(|allowed| allowed.trim_start_matches('.').eq_ignore_ascii_case(ext))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allowed() -> Vec<String> {
        vec!["xlsx".to_string(), "xls".to_string()]
    }

    #[test]
    fn extension_check_ignores_case() {
        assert!(has_allowed_extension(Path::new("report.XLSX"), &allowed()));
        assert!(has_allowed_extension(Path::new("report.xls"), &allowed()));
        assert!(!has_allowed_extension(Path::new("report.csv"), &allowed()));
        assert!(!has_allowed_extension(Path::new("report"), &allowed()));
    }

    #[test]
    fn leading_dot_in_config_is_accepted() {
        assert!(has_allowed_extension(
            Path::new("report.xlsx"),
            &[".xlsx".to_string()]
        ));
    }

    #[test]
    fn unsupported_type_is_rejected_before_io() {
        let err = UploadedFile::inspect(Path::new("/nonexistent/data.csv"), &allowed());
        match err {
            Err(SheetError::UnsupportedFormat { name, allowed }) => {
                assert_eq!(name, "data.csv");
                assert_eq!(allowed, ".xlsx, .xls");
            }
            other => panic!("Expected UnsupportedFormat, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = UploadedFile::inspect(Path::new("/nonexistent/data.xlsx"), &allowed());
        assert!(matches!(err, Err(SheetError::Io(_))));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn reports_size() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let path = dir.path().join("listing.xlsx");
        std::fs::write(&path, vec![0_u8; 1024 * 1024]).expect("file should be written");

        let file = UploadedFile::inspect(&path, &allowed()).expect("file should be accepted");
        assert_eq!(file.name, "listing.xlsx");
        assert_eq!(file.size_bytes, 1024 * 1024);
        assert!((file.size_mb() - 1.0).abs() < f64::EPSILON);
    }
}
