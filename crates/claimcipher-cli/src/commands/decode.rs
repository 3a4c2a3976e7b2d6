//! Decode command implementation.

use crate::cli::DecodeArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use claimcipher_decoder::NhtsaDecoder;
use claimcipher_domain::traits::IdentifierDecoder;

/// Execute the decode command.
pub fn execute_decode(args: DecodeArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let decoder = NhtsaDecoder::new(config.decoder.clone())?;
    let decoded = decoder.decode(&args.vin)?;

    println!("{}", formatter.format_decoded(args.vin.trim(), &decoded)?);
    Ok(())
}
