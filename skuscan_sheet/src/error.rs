use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SheetError>;

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("Unsupported file type: {name} (accepted: {allowed})")]
    UnsupportedFormat { name: String, allowed: String },

    #[error("Cannot read spreadsheet {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("Spreadsheet has no worksheet: {}", .0.display())]
    NoWorksheet(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
