use anyhow::{anyhow, Context as _, Result};
use std::path::Path;

use crate::args::{Args, Command};
use crate::coa;
use crate::config::{ConvertConfig, ParserStrategy};
use crate::import;
use crate::terminal::{self, BulletPointPrinter};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn main(args: Args) -> Result<()> {
    match args.command {
        Some(Command::GenCoa {
            register_csv,
            coa_yaml,
            parser,
        }) => main_gen_coa(&register_csv, &coa_yaml, parser.csv_parser.into()),
        Some(Command::Version) => {
            println!("{}", version_message());
            Ok(())
        }
        None => {
            let config = args
                .convert
                .into_config()
                .ok_or_else(|| anyhow!("Missing input file, see --help"))?;
            main_convert(&config)
        }
    }
}

pub fn main_convert(config: &ConvertConfig) -> Result<()> {
    let conversion = import::convert_file(config)
        .with_context(|| anyhow!("Error processing file {}", config.input.display()))?;
    terminal::print_conversion_summary(
        &BulletPointPrinter::new_stdout(),
        &config.output,
        &conversion,
    );
    Ok(())
}

pub fn main_gen_coa(register_csv: &Path, coa_yaml: &Path, strategy: ParserStrategy) -> Result<()> {
    let mapping = coa::write_chart_of_accounts(register_csv, coa_yaml, strategy)
        .with_context(|| anyhow!("Failed to generate chart of accounts"))?;
    terminal::print_chart_of_accounts_summary(&BulletPointPrinter::new_stdout(), coa_yaml, &mapping);
    Ok(())
}

fn version_message() -> String {
    format!("YNAB to Ledger Converter v{VERSION}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConvertOptions;

    const REGISTER: &str = "Account,Date,Payee,Category Group/Category,Memo,Outflow,Inflow\n\
        Checking,12/28/2020,Some Restaurant,Just for Fun: Dining Out,,$41.04,$0.00\n";

    #[test]
    fn test_version_message() {
        assert_eq!("YNAB to Ledger Converter v1.0.0", version_message());
    }

    #[test]
    fn generated_chart_of_accounts_drives_conversion() {
        let dir = tempfile::tempdir().unwrap();
        let register = dir.path().join("register.csv");
        let coa_yaml = dir.path().join("coa.yaml");
        let ledger = dir.path().join("ynab_ledger.dat");
        std::fs::write(&register, REGISTER).unwrap();

        main_gen_coa(&register, &coa_yaml, ParserStrategy::Auto).unwrap();
        main_convert(&ConvertConfig {
            input: register,
            output: ledger.clone(),
            mapping: coa_yaml,
            options: ConvertOptions::default(),
        })
        .unwrap();

        assert_eq!(
            "2020/12/28 Some Restaurant\n    Expenses:JustforFunDiningOut  $41.04\n    Assets:Bank:Checking  ",
            std::fs::read_to_string(ledger).unwrap()
        );
    }

    #[test]
    fn missing_mapping_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let register = dir.path().join("register.csv");
        std::fs::write(&register, REGISTER).unwrap();
        let mut config = ConvertConfig::new(register);
        config.mapping = dir.path().join("missing.yaml");
        config.output = dir.path().join("out.dat");

        let err = main_convert(&config).unwrap_err();
        assert!(err.to_string().starts_with("Error processing file"));
        assert!(!config.output.exists());
    }
}
