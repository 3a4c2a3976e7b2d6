//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};
use claimcipher_domain::{ClaimField, Overrides};
use std::path::PathBuf;

/// Claim Cipher - Turn insurance estimates into filled claim forms.
#[derive(Debug, Parser)]
#[command(name = "claimcipher")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (output paths only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Process an estimate into a filled form, record and summary
    Process(ProcessArgs),

    /// Match fields in an estimate and save them as parsed_data.json
    Parse(ParseArgs),

    /// Decode a VIN and show its basic attributes
    Decode(DecodeArgs),

    /// List the named fields of a form template
    Fields(FieldsArgs),
}

/// Arguments for the process command.
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Path to the estimate (PDF, or .txt)
    #[arg(long)]
    pub estimate: PathBuf,

    /// Path to the blank form template
    #[arg(long)]
    pub bcif: Option<PathBuf>,

    /// Directory where outputs are saved
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: OverrideArgs,

    /// Mark the vehicle as a total loss; omit to mark as repairable
    #[arg(long)]
    pub total_loss: bool,

    /// Read at most this many pages of the estimate [env: MAX_PAGES]
    #[arg(long)]
    pub max_pages: Option<usize>,

    /// Skip the VIN decoder
    #[arg(long)]
    pub no_decode: bool,
}

/// One override per canonical field.
#[derive(Debug, Default, Args)]
pub struct OverrideArgs {
    /// Customer name
    #[arg(long)]
    pub customer_name: Option<String>,

    /// Adjuster name
    #[arg(long)]
    pub adjuster_name: Option<String>,

    /// Claim number
    #[arg(long)]
    pub claim_number: Option<String>,

    /// Date of loss (YYYY-MM-DD)
    #[arg(long)]
    pub date_of_loss: Option<String>,

    /// Inspection location
    #[arg(long)]
    pub location: Option<String>,

    /// VIN (overrides the parsed VIN)
    #[arg(long)]
    pub vin: Option<String>,

    /// Vehicle year (overrides parsed/decoded year)
    #[arg(long)]
    pub year: Option<String>,

    /// Vehicle make (overrides parsed/decoded make)
    #[arg(long)]
    pub make: Option<String>,

    /// Vehicle model (overrides parsed/decoded model)
    #[arg(long)]
    pub model: Option<String>,

    /// Vehicle mileage (overrides parsed mileage)
    #[arg(long)]
    pub mileage: Option<String>,

    /// Damage description (overrides parsed damages)
    #[arg(long)]
    pub damages: Option<String>,

    /// Estimated days to repair
    #[arg(long)]
    pub days_to_repair: Option<String>,
}

impl OverrideArgs {
    /// Collect the supplied values into an override set.
    pub fn to_overrides(&self) -> Overrides {
        let pairs = [
            (ClaimField::CustomerName, &self.customer_name),
            (ClaimField::AdjusterName, &self.adjuster_name),
            (ClaimField::ClaimNumber, &self.claim_number),
            (ClaimField::DateOfLoss, &self.date_of_loss),
            (ClaimField::InspectionLocation, &self.location),
            (ClaimField::Vin, &self.vin),
            (ClaimField::Year, &self.year),
            (ClaimField::Make, &self.make),
            (ClaimField::Model, &self.model),
            (ClaimField::Mileage, &self.mileage),
            (ClaimField::Damages, &self.damages),
            (ClaimField::DaysToRepair, &self.days_to_repair),
        ];

        let mut overrides = Overrides::new();
        for (field, value) in pairs {
            overrides.set_opt(field, value.clone());
        }
        overrides
    }
}

/// Arguments for the parse command.
#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Path to the estimate (PDF, or .txt)
    #[arg(long)]
    pub estimate: PathBuf,

    /// Directory where parsed_data.json is saved
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Read at most this many pages of the estimate [env: MAX_PAGES]
    #[arg(long)]
    pub max_pages: Option<usize>,
}

/// Arguments for the decode command.
#[derive(Debug, Args)]
pub struct DecodeArgs {
    /// 17-character VIN
    pub vin: String,
}

/// Arguments for the fields command.
#[derive(Debug, Args)]
pub struct FieldsArgs {
    /// Path to the form template
    #[arg(long)]
    pub bcif: Option<PathBuf>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
