use console::{style, StyledObject};
use std::collections::BTreeMap;
use std::path::Path;

use crate::config::Mapping;
use crate::import::{Conversion, SkipReason};

mod bullet_points;

#[cfg(test)]
pub use bullet_points::RecordingLineWriter;
pub use bullet_points::{BulletPointPrinter, LineWriter, StdoutLineWriter};

pub fn print_conversion_summary<W: LineWriter + Clone>(
    printer: &BulletPointPrinter<W>,
    output: &Path,
    conversion: &Conversion,
) {
    printer.print_line(style_header(&format!(
        "Successfully converted to {}",
        output.display()
    )));
    printer.print_item(format!("{} entries", conversion.entries.len()));
    if conversion.skipped.is_empty() {
        return;
    }
    printer.print_item(style_skipped(format!(
        "{} rows skipped",
        conversion.skipped.len()
    )));
    let printer = printer.indent();
    for (reason, lines) in skipped_lines_by_reason(conversion) {
        let lines = lines
            .iter()
            .map(|line| line.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        printer.print_item(format!("{reason}: line {lines}"));
    }
}

pub fn print_chart_of_accounts_summary<W: LineWriter + Clone>(
    printer: &BulletPointPrinter<W>,
    output: &Path,
    mapping: &Mapping,
) {
    printer.print_line(style_header(&format!(
        "Chart of accounts written to {}",
        output.display()
    )));
    printer.print_item(format!("{} accounts", mapping.accounts.len()));
    printer.print_item(format!("{} categories", mapping.categories.len()));
}

fn skipped_lines_by_reason(conversion: &Conversion) -> BTreeMap<SkipReason, Vec<u64>> {
    let mut grouped: BTreeMap<SkipReason, Vec<u64>> = BTreeMap::new();
    for skipped in &conversion.skipped {
        grouped.entry(skipped.reason).or_default().push(skipped.line);
    }
    grouped
}

fn style_header(header: &str) -> StyledObject<&str> {
    style(header).bold()
}

fn style_skipped(message: String) -> StyledObject<String> {
    style(message).yellow()
}
