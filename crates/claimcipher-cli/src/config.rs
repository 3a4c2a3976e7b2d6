//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use claimcipher_assembler::ValuationConfig;
use claimcipher_decoder::DecoderConfig;
use claimcipher_extractor::ExtractorConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Default location of the blank form template.
pub const DEFAULT_BCIF_PATH: &str = "input/CCC BCIF.pdf";

/// Default output directory.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Input and output locations
    #[serde(default)]
    pub paths: Paths,

    /// VIN decoder settings
    #[serde(default)]
    pub decoder: DecoderConfig,

    /// Estimate extraction settings
    #[serde(default)]
    pub extraction: ExtractorConfig,

    /// Reference valuation settings
    #[serde(default)]
    pub valuation: ValuationConfig,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Default input and output locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paths {
    /// Blank form template
    #[serde(default = "default_bcif")]
    pub bcif: PathBuf,

    /// Directory outputs are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".claimcipher").join("config.toml"))
    }

    /// Load the configuration from the default path, or defaults if absent.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load a configuration file the user named explicitly.
    ///
    /// A missing file still yields defaults, but is reported with `warn!`.
    pub fn load_explicit(path: &Path) -> Result<Self> {
        if !path.exists() {
            warn!(
                "Config file {} does not exist; using defaults",
                path.display()
            );
        }
        Self::load_from(path)
    }

    /// Load configuration from `path`, or defaults if the file is absent.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        self.decoder
            .validate()
            .map_err(|e| CliError::Config(format!("[decoder] {}", e)))?;
        self.extraction
            .validate()
            .map_err(|e| CliError::Config(format!("[extraction] {}", e)))?;
        self.valuation
            .validate()
            .map_err(|e| CliError::Config(format!("[valuation] {}", e)))?;
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            bcif: default_bcif(),
            output_dir: default_output_dir(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_bcif() -> PathBuf {
    PathBuf::from(DEFAULT_BCIF_PATH)
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}
