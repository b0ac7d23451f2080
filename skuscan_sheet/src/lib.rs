#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Spreadsheet I/O around the extraction core: accepting uploads, reading the
//! first worksheet into a [`skuscan_core::Grid`], and writing exports.

mod error;
pub mod export;
pub mod reader;
pub mod upload;

pub use error::{Result, SheetError};
pub use export::{export_file_name, render_csv, render_json, write_export};
pub use reader::{grid_from_range, read_grid};
pub use upload::UploadedFile;
