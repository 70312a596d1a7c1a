use crate::config::{load_mapping, ConvertConfig, ConvertOptions, Mapping, ParserStrategy};
use crate::error::{ConvertError, Result};
use crate::export;
use crate::ir::JournalEntry;

mod entry;
mod header;
pub mod parser;

pub use entry::{blank_if_zero, build_entry, SkipReason, TRANSFER_MARKER};
pub use header::{find_column, Column, HeaderIndex, Record};

use parser::{utils, ParsedCsv};

const PREVIEW_LINES: usize = 5;

/// A row of the input that didn't become an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedRow {
    pub line: u64,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Oldest first
    pub entries: Vec<JournalEntry>,
    pub skipped: Vec<SkippedRow>,
}

impl Conversion {
    pub fn render(&self) -> String {
        export::render_document(&self.entries)
    }
}

/// Read the raw bytes of a CSV file into header and rows.
pub fn load_rows(input: &[u8], strategy: ParserStrategy) -> Result<ParsedCsv> {
    let content = utils::strip_preamble(input);
    let delimiter = utils::detect_delimiter(&content);
    log::info!("Detected delimiter: {delimiter}");
    let content = utils::repair_bare_quotes(&content, delimiter);
    parser::parse(&content, delimiter, strategy)
}

/// Convert a YNAB register export into journal entries.
///
/// The export lists the newest transaction first, the entries come out oldest first.
pub fn convert(input: &[u8], mapping: &Mapping, options: &ConvertOptions) -> Result<Conversion> {
    let parsed = load_rows(input, options.parser)?;
    let index = HeaderIndex::resolve(&parsed.headers)?;

    let mut entries = Vec::new();
    let mut skipped = Vec::new();
    for row in &parsed.rows {
        let built = match index.record(row) {
            Some(record) => build_entry(&record, mapping),
            None => Err(SkipReason::InsufficientFields),
        };
        match built {
            Ok(entry) => entries.push(entry),
            Err(reason) => {
                if reason == SkipReason::InsufficientFields {
                    log::warn!("Skipping line {} due to {reason}", row.line);
                } else {
                    log::debug!("Skipping line {}: {reason}", row.line);
                }
                skipped.push(SkippedRow {
                    line: row.line,
                    reason,
                });
            }
        }
    }
    entries.reverse();

    Ok(Conversion { entries, skipped })
}

/// Read the input file, convert it and write the journal to the output file.
pub fn convert_file(config: &ConvertConfig) -> Result<Conversion> {
    let input = std::fs::read(&config.input).map_err(|err| ConvertError::io(&config.input, err))?;
    log_preview(&input);
    let mapping = load_mapping(&config.mapping)?;
    let conversion = convert(&input, &mapping, &config.options)?;
    std::fs::write(&config.output, conversion.render())
        .map_err(|err| ConvertError::io(&config.output, err))?;
    log::info!(
        "Wrote {} entries to {}",
        conversion.entries.len(),
        config.output.display()
    );
    Ok(conversion)
}

fn log_preview(input: &[u8]) {
    log::debug!("File preview (first {PREVIEW_LINES} lines):");
    for (number, line) in String::from_utf8_lossy(input)
        .lines()
        .take(PREVIEW_LINES)
        .enumerate()
    {
        log::debug!("{}: {}", number + 1, line);
    }
}
