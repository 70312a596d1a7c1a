use chumsky::Parser as _;

use super::utils::{line, Delimiter};
use super::{ParsedCsv, Row};
use crate::error::{ConvertError, Result};

/// Split the content line by line with the quote-aware scanner.
///
/// Blank lines are dropped. Needs at least a header line and one more line.
pub fn parse_fallback(content: &str, delimiter: Delimiter) -> Result<ParsedCsv> {
    let lines = content.split('\n').collect::<Vec<_>>();
    let [header_line, data_lines @ ..] = lines.as_slice() else {
        return Err(not_enough_lines());
    };
    if data_lines.is_empty() {
        return Err(not_enough_lines());
    }

    let scanner = line(delimiter);
    let scan = |text: &str, line_number: u64| {
        scanner
            .parse(text)
            .map_err(|errors| ConvertError::parse(Some(line_number), format!("{errors:?}")))
    };

    let headers = scan(*header_line, 1)?;
    let rows = data_lines
        .iter()
        .zip(2..)
        .filter(|(text, _)| !text.trim().is_empty())
        .map(|(text, line_number)| -> Result<Row> {
            Ok(Row {
                line: line_number,
                fields: scan(*text, line_number)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ParsedCsv { headers, rows })
}

fn not_enough_lines() -> ConvertError {
    ConvertError::parse(None, "not enough lines in the CSV file")
}
