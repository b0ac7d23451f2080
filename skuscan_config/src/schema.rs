use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

use skuscan_core::ExtractWindows;

const CONFIG_DIR_NAME: &str = "skuscan";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub extraction: ExtractWindows,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct InputConfig {
    /// Accepted upload extensions, compared case-insensitively.
    #[serde(default = "InputConfig::default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,
    /// Treat the first row of the sheet as column names.
    #[serde(default = "InputConfig::default_header_row")]
    pub header_row: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            allowed_extensions: Self::default_allowed_extensions(),
            header_row: Self::default_header_row(),
        }
    }
}

impl InputConfig {
    fn default_allowed_extensions() -> Vec<String> {
        vec!["xlsx".to_string(), "xls".to_string()]
    }

    const fn default_header_row() -> bool {
        true
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default = "OutputConfig::default_directory")]
    pub directory: PathBuf,
    #[serde(default = "OutputConfig::default_file_prefix")]
    pub file_prefix: String,
    #[serde(default)]
    pub format: ExportFormat,
    /// Prefix CSV output with a UTF-8 byte order mark.
    #[serde(default = "OutputConfig::default_utf8_bom")]
    pub utf8_bom: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: Self::default_directory(),
            file_prefix: Self::default_file_prefix(),
            format: ExportFormat::default(),
            utf8_bom: Self::default_utf8_bom(),
        }
    }
}

impl OutputConfig {
    fn default_directory() -> PathBuf {
        PathBuf::from(".")
    }

    fn default_file_prefix() -> String {
        "extracted_data".to_string()
    }

    const fn default_utf8_bom() -> bool {
        true
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown export format: {other} (expected csv or json)")),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// One of `error`, `warn`, `info`, `debug`, `trace`.
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
        }
    }
}

impl LoggingConfig {
    fn default_level() -> String {
        "info".to_string()
    }
}

impl Config {
    /// Location of the config file, `~/skuscan/config.json`.
    pub fn path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join(CONFIG_DIR_NAME))
    }

    /// Load the config file, falling back to defaults when it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::path()?)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config file {}: {e}", path.display()))?;

        Ok(config)
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_path = Self::ensure_config_dir()?.join(CONFIG_FILE_NAME);
        Self::write_default(&config_path)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("🔧 Configuration options:");
        println!("   - extraction.sku / extraction.fnsku: look-ahead windows after each ASIN label");
        println!("   - input.allowed_extensions: accepted spreadsheet types");
        println!("   - input.header_row: treat the first sheet row as column names");
        println!("   - output.directory / output.file_prefix: where exports are written");
        println!("   - output.format: csv or json");
        println!("   - output.utf8_bom: prefix CSV with a BOM so spreadsheet apps detect UTF-8");
        println!("   - logging.level: error, warn, info, debug or trace");
        println!();
        Ok(())
    }

    /// Write the default config to `path`, refusing to overwrite.
    pub fn write_default(path: &Path) -> anyhow::Result<()> {
        if path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                path.display()
            );
        }

        let content = serde_json::to_string_pretty(&Self::default())?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
