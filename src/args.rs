use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::{
    ConvertConfig, ConvertOptions, ParserStrategy, DEFAULT_MAPPING_PATH, DEFAULT_OUTPUT_PATH,
};

/// Convert a YNAB (You Need a Budget) register export to a Ledger journal.
///
/// The input file should be the Register CSV export from YNAB, with dates in mm/dd/yyyy
/// format and numbers using a period (.) as the decimal separator.
#[derive(Parser, Debug)]
#[command(name = "ynab-ledger", version, args_conflicts_with_subcommands = true)]
pub struct Args {
    #[clap(subcommand)]
    pub command: Option<Command>,

    #[clap(flatten)]
    pub convert: ConvertArgs,
}

#[derive(clap::Args, Debug)]
pub struct ConvertArgs {
    /// Path to the YNAB register CSV
    pub input: Option<PathBuf>,

    /// Output file path
    #[clap(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Chart of accounts mapping file
    #[clap(short, long, default_value = DEFAULT_MAPPING_PATH)]
    pub mapping: PathBuf,

    #[clap(flatten)]
    pub parser: ParserArgs,
}

#[derive(clap::Args, Debug)]
pub struct ParserArgs {
    /// Which CSV parser to use
    #[clap(long = "csv-parser", value_enum, default_value_t = CsvParser::Auto)]
    pub csv_parser: CsvParser,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CsvParser {
    /// Standard CSV parsing, falling back to the lenient line scanner if it fails
    Auto,
    /// Standard CSV parsing only
    Strict,
    /// Lenient line scanner only
    Fallback,
}

impl From<CsvParser> for ParserStrategy {
    fn from(parser: CsvParser) -> Self {
        match parser {
            CsvParser::Auto => ParserStrategy::Auto,
            CsvParser::Strict => ParserStrategy::Strict,
            CsvParser::Fallback => ParserStrategy::Fallback,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a chart of accounts YAML from a YNAB register CSV
    GenCoa {
        /// Path to the YNAB register CSV
        register_csv: PathBuf,

        /// Where to write the chart of accounts
        coa_yaml: PathBuf,

        #[clap(flatten)]
        parser: ParserArgs,
    },

    /// Print the version number
    Version,
}

impl ConvertArgs {
    /// `None` if no input file was given
    pub fn into_config(self) -> Option<ConvertConfig> {
        Some(ConvertConfig {
            input: self.input?,
            output: self.output,
            mapping: self.mapping,
            options: ConvertOptions {
                parser: self.parser.csv_parser.into(),
            },
        })
    }
}

pub fn parse() -> Args {
    Args::parse()
}
