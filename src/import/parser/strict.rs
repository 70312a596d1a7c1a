use csv::StringRecord;

use super::utils::Delimiter;
use super::{ParsedCsv, Row};
use crate::error::Result;

/// Result of trying the `csv` crate on the input.
#[derive(Debug, PartialEq, Eq)]
pub enum StrictOutcome {
    Parsed(ParsedCsv),
    /// The header row couldn't be read, the whole file needs the fallback scanner
    NeedsFallback { reason: String },
}

/// Parse with the `csv` crate, allowing rows of different length.
///
/// Leading whitespace of a cell is dropped, but only outside of quotes.
/// Only failing to read the header row hands over to the fallback. An unreadable
/// data row is a fatal error.
pub fn parse_strict(content: &str, delimiter: Delimiter) -> Result<StrictOutcome> {
    let content = trim_leading_space(content, delimiter);
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter.as_byte())
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());
    let mut records = reader.records();

    let headers = match records.next() {
        Some(Ok(record)) => fields(&record),
        Some(Err(err)) => {
            return Ok(StrictOutcome::NeedsFallback {
                reason: err.to_string(),
            })
        }
        None => {
            return Ok(StrictOutcome::NeedsFallback {
                reason: "no header row".to_string(),
            })
        }
    };

    let rows = records
        .map(|record| -> Result<Row> {
            let record = record?;
            Ok(Row {
                line: record.position().map_or(0, |pos| pos.line()),
                fields: fields(&record),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(StrictOutcome::Parsed(ParsedCsv { headers, rows }))
}

fn fields(record: &StringRecord) -> Vec<String> {
    record.iter().map(str::to_string).collect()
}

/// Drop whitespace at the start of every cell, so that `a, "b"` reads as a quoted `b`.
///
/// Only a cell that opens with a quote is quoted, quotes elsewhere are literal.
/// Quote state carries across lines, a quoted cell may contain line breaks.
fn trim_leading_space(content: &str, delimiter: Delimiter) -> String {
    let delimiter = delimiter.as_char();
    let mut trimmed = String::with_capacity(content.len());
    let mut at_cell_start = true;
    let mut quoted_cell = false;
    let mut in_quotes = false;
    for c in content.chars() {
        if at_cell_start {
            if c.is_whitespace() && c != '\n' && c != delimiter {
                continue;
            }
            quoted_cell = c == '"';
        }
        if quoted_cell && c == '"' {
            in_quotes = !in_quotes;
        }
        at_cell_start = !in_quotes && (c == delimiter || c == '\n');
        trimmed.push(c);
    }
    trimmed
}
