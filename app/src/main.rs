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

use clap::{Parser, Subcommand};
use skuscan_config::{Config, ExportFormat};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use tracing::{Level, warn};
use tracing_subscriber::FmtSubscriber;

mod command;
mod display;

use command::{
    CommandStrategy, ExtractInput, ExtractStrategy, InfoStrategy, InitStrategy, VersionStrategy,
};

#[derive(Parser)]
#[command(name = "skuscan")]
#[command(about = "Extract ASIN, SKU and FNSKU records from spreadsheet exports", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract records from an .xlsx/.xls file
    Extract {
        /// Spreadsheet to read
        file: PathBuf,

        /// Directory to write the export into
        #[arg(short = 'o', long)]
        output_dir: Option<PathBuf>,

        /// Export format (csv or json)
        #[arg(short = 'f', long)]
        format: Option<ExportFormat>,

        /// Number of records to preview, 0 to disable
        #[arg(long, default_value_t = 10)]
        preview: usize,

        /// Do not write an export file
        #[arg(long)]
        no_export: bool,

        /// Treat the first sheet row as data instead of column names
        #[arg(long)]
        no_header: bool,
    },
    /// Initialize configuration
    Init,
    /// Show effective configuration
    Info,
    /// Show version
    Version,
}

impl Commands {
    /// `init` and `version` work even when the config file is broken.
    const fn reads_config(&self) -> bool {
        matches!(self, Self::Extract { .. } | Self::Info)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = if cli.command.reads_config() {
        Config::load()?
    } else {
        Config::default()
    };
    init_logging(&config, cli.verbose)?;

    match cli.command {
        Commands::Extract {
            file,
            output_dir,
            format,
            preview,
            no_export,
            no_header,
        } => {
            ExtractStrategy
                .execute(ExtractInput {
                    config,
                    file,
                    preview,
                    no_export,
                    output_dir,
                    format,
                    no_header,
                })
                .await
        }
        Commands::Init => InitStrategy.execute(()).await,
        Commands::Info => InfoStrategy.execute(config).await,
        Commands::Version => VersionStrategy.execute(()).await,
    }
}

fn init_logging(config: &Config, verbose: bool) -> anyhow::Result<()> {
    let configured = Level::from_str(&config.logging.level).ok();
    let level = if verbose {
        Level::DEBUG
    } else {
        configured.unwrap_or(Level::INFO)
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    if configured.is_none() {
        warn!(
            "Unknown logging.level {:?}, falling back to {level}",
            config.logging.level
        );
    }

    Ok(())
}
