mod delimiter;
mod line;
mod preamble;
mod quotes;
#[cfg(test)]
mod testutils;

pub use delimiter::{detect_delimiter, Delimiter};
pub use line::line;
pub use preamble::strip_preamble;
pub use quotes::repair_bare_quotes;
#[cfg(test)]
pub use testutils::test_parser;
