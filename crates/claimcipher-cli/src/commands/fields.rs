//! Fields command implementation.

use crate::cli::FieldsArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use claimcipher_forms::PdfForm;

/// Execute the fields command.
pub fn execute_fields(args: FieldsArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let path = args.bcif.unwrap_or_else(|| config.paths.bcif.clone());
    let form = PdfForm::load(&path)?;

    println!("{}", formatter.format_fields(&form.fields())?);
    Ok(())
}
