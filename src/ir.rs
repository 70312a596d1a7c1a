use std::fmt;

/// A date in the `yyyy/mm/dd` order ledger files use.
///
/// The components are kept as they appear in the export, they aren't validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDate {
    pub year: String,
    pub month: String,
    pub day: String,
}

impl EntryDate {
    /// Parse a `mm/dd/yyyy` date. Returns `None` unless there are exactly three components.
    pub fn from_month_day_year(date: &str) -> Option<Self> {
        let mut parts = date.split('/');
        let (Some(month), Some(day), Some(year), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return None;
        };
        Some(Self {
            year: year.to_string(),
            month: month.to_string(),
            day: day.to_string(),
        })
    }
}

impl fmt::Display for EntryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.year, self.month, self.day)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Posting {
    pub account: String,
    /// Amount as written in the export, `None` if blank
    pub amount: Option<String>,
}

/// One journal entry with a source and a destination posting.
///
/// Exactly one of the two postings carries an amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    pub date: EntryDate,
    pub description: String,
    pub source: Posting,
    pub destination: Posting,
}
