use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Semicolon,
    Tab,
}

impl Delimiter {
    const CANDIDATES: [Delimiter; 3] = [Delimiter::Comma, Delimiter::Semicolon, Delimiter::Tab];

    pub fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Semicolon => ';',
            Delimiter::Tab => '\t',
        }
    }

    pub fn as_byte(self) -> u8 {
        self.as_char() as u8
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_char())
    }
}

/// Guess the delimiter from the first line.
///
/// Picks the candidate that occurs most often. Without a single winner this is a comma.
/// Only the first line is looked at, so a delimiter inside a quoted header cell can
/// throw this off.
pub fn detect_delimiter(content: &str) -> Delimiter {
    let first_line = content.split('\n').next().unwrap_or_default();
    let counts = Delimiter::CANDIDATES.map(|delimiter| {
        (
            delimiter,
            first_line.matches(delimiter.as_char()).count(),
        )
    });
    let max_count = counts.iter().map(|(_, count)| *count).max().unwrap_or(0);
    let mut winners = counts
        .iter()
        .filter(|(_, count)| max_count > 0 && *count == max_count);
    match (winners.next(), winners.next()) {
        (Some((delimiter, _)), None) => *delimiter,
        _ => Delimiter::Comma,
    }
}
