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

//! Label-to-value extraction of ASIN/SKU/FNSKU records from scattered
//! spreadsheet cells.
//!
//! The pipeline is `Grid` → [`flatten`] → `&[String]` → [`Extractor`] →
//! `Vec<ProductRecord>`. Everything in this crate is pure and synchronous.

pub mod cell;
pub mod extract;
pub mod flatten;
pub mod grid;
pub mod record;

pub use cell::CellValue;
pub use extract::{ASIN_LABEL, ExtractWindows, Extractor, FNSKU_LABEL, SKU_LABEL, extract_records};
pub use flatten::flatten;
pub use grid::Grid;
pub use record::{ExtractionSummary, ProductRecord};
