mod fallback;
mod strict;
pub mod utils;

pub use fallback::parse_fallback;
pub use strict::{parse_strict, StrictOutcome};

use utils::Delimiter;

use crate::config::ParserStrategy;
use crate::error::{ConvertError, Result};

/// Header cells and data rows of a CSV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCsv {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Line in the input this row starts on, 1-based
    pub line: u64,
    pub fields: Vec<String>,
}

pub fn parse(content: &str, delimiter: Delimiter, strategy: ParserStrategy) -> Result<ParsedCsv> {
    if strategy == ParserStrategy::Fallback {
        log::info!("Using fallback CSV parser");
        return parse_fallback(content, delimiter);
    }
    log::info!("Using standard CSV parser");
    match parse_strict(content, delimiter)? {
        StrictOutcome::Parsed(parsed) => Ok(parsed),
        StrictOutcome::NeedsFallback { reason } => match strategy {
            ParserStrategy::Strict => Err(ConvertError::parse(Some(1), reason)),
            ParserStrategy::Auto | ParserStrategy::Fallback => {
                log::warn!("Standard CSV parsing failed ({reason}), trying fallback method...");
                parse_fallback(content, delimiter)
            }
        },
    }
}
