//! Process command implementation.

use super::estimate_parser;
use crate::cli::ProcessArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use crate::pipeline::{write_outputs, ClaimPipeline, ClaimRequest};
use claimcipher_assembler::{SystemClock, ValuationEstimator};
use claimcipher_decoder::NhtsaDecoder;
use claimcipher_forms::TextRenderer;

/// Execute the process command.
pub fn execute_process(args: ProcessArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let parser = estimate_parser(config, args.max_pages)?;
    let decoder = if args.no_decode || !config.decoder.enabled {
        None
    } else {
        Some(NhtsaDecoder::new(config.decoder.clone())?)
    };
    let estimator = ValuationEstimator::new(config.valuation.clone(), SystemClock);
    let pipeline = ClaimPipeline::new(parser, decoder, estimator);

    let request = ClaimRequest {
        estimate: args.estimate,
        template: args.bcif.unwrap_or_else(|| config.paths.bcif.clone()),
        overrides: args.overrides.to_overrides(),
        total_loss: args.total_loss,
    };
    let outcome = pipeline.run(&request)?;

    let output_dir = args
        .output_dir
        .unwrap_or_else(|| config.paths.output_dir.clone());
    let paths = write_outputs(&outcome, &output_dir, &TextRenderer::new())?;

    println!("{}", formatter.format_outcome(&outcome, &paths)?);
    Ok(())
}
