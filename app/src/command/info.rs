use skuscan_config::Config;

/// Strategy for displaying the effective configuration.
///
/// Shows where the config file lives and every value in use, including
/// defaults for sections the file leaves out.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = Config;

    async fn execute(&self, config: Self::Input) -> anyhow::Result<()> {
        println!("=== skuscan Configuration ===\n");

        let path = Config::path()?;
        let state = if path.exists() {
            "loaded"
        } else {
            "not found, using defaults"
        };
        println!("Config File: {} ({state})", path.display());
        println!();

        println!("Extraction:");
        println!("  SKU Window: {}", config.extraction.sku);
        println!("  FNSKU Window: {}", config.extraction.fnsku);
        println!();

        println!("Input:");
        println!(
            "  Allowed Extensions: {}",
            config.input.allowed_extensions.join(", ")
        );
        println!("  Header Row: {}", config.input.header_row);
        println!();

        println!("Output:");
        println!("  Directory: {}", config.output.directory.display());
        println!("  File Prefix: {}", config.output.file_prefix);
        println!("  Format: {}", config.output.format);
        println!("  UTF-8 BOM: {}", config.output.utf8_bom);
        println!();

        println!("Logging:");
        println!("  Level: {}", config.logging.level);

        Ok(())
    }
}
