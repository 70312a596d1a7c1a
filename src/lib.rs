pub mod args;
pub mod cli;
pub mod coa;
pub mod config;
pub mod error;
pub mod export;
pub mod import;
pub mod ir;
pub mod terminal;

pub use config::{ConvertConfig, ConvertOptions, Mapping, ParserStrategy};
pub use error::ConvertError;
pub use import::{convert, convert_file, Conversion, SkipReason};
