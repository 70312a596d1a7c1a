use crate::ir::{JournalEntry, Posting};

const POSTING_INDENT: &str = "    ";

pub fn render_entry(entry: &JournalEntry) -> String {
    format!(
        "{} {}\n{}\n{}",
        entry.date,
        entry.description,
        render_posting(&entry.source),
        render_posting(&entry.destination),
    )
}

fn render_posting(posting: &Posting) -> String {
    format!(
        "{POSTING_INDENT}{}  {}",
        posting.account,
        posting.amount.as_deref().unwrap_or_default(),
    )
}

/// Render entries in the given order, separated by a blank line.
///
/// There is no newline after the last entry.
pub fn render_document<'a>(entries: impl IntoIterator<Item = &'a JournalEntry>) -> String {
    entries
        .into_iter()
        .map(render_entry)
        .collect::<Vec<_>>()
        .join("\n\n")
}
