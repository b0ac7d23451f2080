use anyhow::Context;
use skuscan_config::{Config, ExportFormat};
use skuscan_core::{ExtractionSummary, Extractor, flatten};
use skuscan_sheet::{UploadedFile, read_grid, write_export};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::display;

/// Input parameters for the Extract command strategy.
#[derive(Debug, Clone)]
pub struct ExtractInput {
    pub config: Config,
    /// Spreadsheet to read.
    pub file: PathBuf,
    /// Records to show in the preview table, `0` to skip it.
    pub preview: usize,
    /// Skip writing the export file.
    pub no_export: bool,
    pub output_dir: Option<PathBuf>,
    pub format: Option<ExportFormat>,
    /// Treat the first sheet row as data instead of column names.
    pub no_header: bool,
}

/// Strategy for extracting ASIN/SKU/FNSKU records from a spreadsheet.
///
/// Reads the first worksheet, flattens it, runs the extractor, then previews,
/// summarizes and exports the records. Finding nothing is reported as a
/// normal outcome, not an error.
#[derive(Debug, Clone, Copy)]
pub struct ExtractStrategy;

impl super::CommandStrategy for ExtractStrategy {
    type Input = ExtractInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let mut config = input.config;
        if let Some(dir) = input.output_dir {
            config.output.directory = dir;
        }
        if let Some(format) = input.format {
            config.output.format = format;
        }
        if input.no_header {
            config.input.header_row = false;
        }

        let upload = UploadedFile::inspect(&input.file, &config.input.allowed_extensions)?;
        println!(
            "📁 Selected file: {} ({:.2} MB)",
            upload.name,
            upload.size_mb()
        );

        info!("Reading spreadsheet {}", upload.path.display());
        let header_row = config.input.header_row;
        let path = upload.path.clone();
        let grid = tokio::task::spawn_blocking(move || read_grid(&path, header_row))
            .await
            .context("Spreadsheet reader task failed")?
            .with_context(|| format!("Failed to extract data from {}", upload.name))?;

        let cells = flatten(&grid);
        debug!("Flattened {} non-empty cells", cells.len());

        let records = Extractor::new(config.extraction).extract(&cells);
        let summary = ExtractionSummary::from_records(&records);
        info!(
            "Extracted {} records ({} with SKU, {} with FNSKU)",
            summary.total, summary.with_sku, summary.with_fnsku
        );

        if summary.is_empty() {
            display::print_no_data();
            return Ok(());
        }

        println!("✅ Extraction succeeded: found {} products", summary.total);
        println!();

        if input.preview > 0 {
            display::print_preview(&records, input.preview);
            println!();
        }

        display::print_summary(&summary);

        if !input.no_export {
            let path = write_export(&records, &config.output)?;
            println!();
            println!("📥 Saved {} to {}", config.output.format, path.display());
        }

        Ok(())
    }
}
