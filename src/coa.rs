use std::collections::BTreeSet;
use std::path::Path;

use crate::config::{Mapping, ParserStrategy, UNKNOWN_ACCOUNT, UNKNOWN_CATEGORY, WILDCARD};
use crate::error::{ConvertError, Result};
use crate::import::{find_column, load_rows, Column};

/// Propose a mapping for every account and category label in a register export.
///
/// The proposed names are a starting point meant to be edited by hand.
pub fn generate_chart_of_accounts(input: &[u8], strategy: ParserStrategy) -> Result<Mapping> {
    let parsed = load_rows(input, strategy)?;
    let (Some(account_index), Some(category_index)) = (
        find_column(&parsed.headers, Column::Account),
        find_column(&parsed.headers, Column::Category),
    ) else {
        return Err(ConvertError::MissingColumn {
            headers: parsed.headers,
        });
    };

    let mut accounts = BTreeSet::new();
    let mut categories = BTreeSet::new();
    for row in &parsed.rows {
        let (Some(account), Some(category)) =
            (row.fields.get(account_index), row.fields.get(category_index))
        else {
            continue;
        };
        accounts.insert(account.as_str());
        categories.insert(category.as_str());
    }

    let mut mapping = Mapping::default();
    for account in accounts.into_iter().filter(|label| !label.is_empty()) {
        mapping.accounts.insert(
            account.to_string(),
            format!("Assets:Bank:{}", sanitize_ledger_name(account)),
        );
    }
    for category in categories.into_iter().filter(|label| !label.is_empty()) {
        mapping.categories.insert(
            category.to_string(),
            format!("Expenses:{}", sanitize_ledger_name(category)),
        );
    }
    mapping
        .accounts
        .insert(WILDCARD.to_string(), UNKNOWN_ACCOUNT.to_string());
    mapping
        .categories
        .insert(WILDCARD.to_string(), UNKNOWN_CATEGORY.to_string());
    Ok(mapping)
}

/// Turn a YNAB label into a single ledger account name component.
pub fn sanitize_ledger_name(label: &str) -> String {
    label
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')' | '/' | ':'))
        .collect::<String>()
        .replace('&', "And")
}

/// Generate a mapping from the register at `input` and write it as YAML to `output`.
pub fn write_chart_of_accounts(
    input: &Path,
    output: &Path,
    strategy: ParserStrategy,
) -> Result<Mapping> {
    let content = std::fs::read(input).map_err(|err| ConvertError::io(input, err))?;
    let mapping = generate_chart_of_accounts(&content, strategy)?;
    let yaml = mapping.to_yaml().map_err(|source| ConvertError::Mapping {
        path: output.to_path_buf(),
        source,
    })?;
    std::fs::write(output, yaml).map_err(|err| ConvertError::io(output, err))?;
    log::info!(
        "Wrote {} accounts and {} categories to {}",
        mapping.accounts.len(),
        mapping.categories.len(),
        output.display()
    );
    Ok(mapping)
}
