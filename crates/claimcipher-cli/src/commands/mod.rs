//! Command implementations.

pub mod decode;
pub mod fields;
pub mod parse;
pub mod process;

pub use self::decode::execute_decode;
pub use self::fields::execute_fields;
pub use self::parse::execute_parse;
pub use self::process::execute_process;

use crate::config::Config;
use crate::error::Result;
use claimcipher_extractor::{AutoExtractor, EstimateParser};
use std::env;
use tracing::warn;

/// Environment variable holding a default page limit.
pub const MAX_PAGES_ENV: &str = "MAX_PAGES";

/// Build an estimate parser.
///
/// The page limit comes from `--max-pages`, then `MAX_PAGES`, then the
/// config file.
fn estimate_parser(config: &Config, max_pages: Option<usize>) -> Result<EstimateParser<AutoExtractor>> {
    let env_pages = env::var(MAX_PAGES_ENV).ok();
    let extraction = config.extraction.clone().with_max_pages(
        max_pages
            .or_else(|| page_limit_from_env(env_pages.as_deref()))
            .or(config.extraction.max_pages),
    );
    Ok(EstimateParser::new(AutoExtractor, extraction)?)
}

/// A positive page count, or `None` for anything else.
fn page_limit_from_env(value: Option<&str>) -> Option<usize> {
    let value = value?;
    match value.trim().parse::<usize>() {
        Ok(pages) if pages > 0 => Some(pages),
        _ => {
            warn!("Ignoring {}={:?}: not a positive page count", MAX_PAGES_ENV, value);
            None
        }
    }
}
