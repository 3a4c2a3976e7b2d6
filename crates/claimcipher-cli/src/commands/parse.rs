//! Parse command implementation.

use super::estimate_parser;
use crate::cli::ParseArgs;
use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::output::{matched_json, Formatter};
use std::fs;

/// Filename the matched fields are saved under.
pub const PARSED_FILE: &str = "parsed_data.json";

/// Execute the parse command.
pub fn execute_parse(args: ParseArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let parser = estimate_parser(config, args.max_pages)?;
    let parsed = parser.parse(&args.estimate)?;

    let output_dir = args
        .output_dir
        .unwrap_or_else(|| config.paths.output_dir.clone());
    fs::create_dir_all(&output_dir)?;
    let path = output_dir.join(PARSED_FILE);
    fs::write(&path, serde_json::to_string_pretty(&matched_json(&parsed.fields))?)?;

    println!("{}", formatter.format_parsed(&parsed)?);
    if formatter.format() == OutputFormat::Table {
        println!("{}", formatter.success(&format!("Parsed data saved to {}", path.display())));
    }
    Ok(())
}
