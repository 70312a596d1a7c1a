use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{ConvertError, Result};

pub const DEFAULT_OUTPUT_PATH: &str = "ynab_ledger.dat";
pub const DEFAULT_MAPPING_PATH: &str = "coa.yaml";

/// Key that matches any label without an exact entry
pub const WILDCARD: &str = "*";
pub const UNKNOWN_ACCOUNT: &str = "Assets:Unknown";
pub const UNKNOWN_CATEGORY: &str = "Expenses:Unknown";

/// Maps YNAB account and category labels to ledger account names.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mapping {
    #[serde(default)]
    pub accounts: BTreeMap<String, String>,
    #[serde(default)]
    pub categories: BTreeMap<String, String>,
}

impl Mapping {
    pub fn resolve_account(&self, label: &str) -> &str {
        lookup(&self.accounts, label).unwrap_or(UNKNOWN_ACCOUNT)
    }

    pub fn resolve_category(&self, label: &str) -> &str {
        lookup(&self.categories, label).unwrap_or(UNKNOWN_CATEGORY)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

fn lookup<'a>(table: &'a BTreeMap<String, String>, label: &str) -> Option<&'a str> {
    table
        .get(label)
        .or_else(|| table.get(WILDCARD))
        .map(String::as_str)
}

pub fn load_mapping(path: &Path) -> Result<Mapping> {
    let content = std::fs::read_to_string(path).map_err(|err| ConvertError::io(path, err))?;
    Mapping::from_yaml(&content).map_err(|source| ConvertError::Mapping {
        path: path.to_path_buf(),
        source,
    })
}

/// How the CSV gets parsed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ParserStrategy {
    /// Strict CSV parsing, and the hand-written scanner if the header can't be read
    #[default]
    Auto,
    /// Strict CSV parsing only
    Strict,
    /// Only the hand-written scanner
    Fallback,
}

/// Options the core conversion needs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    pub parser: ParserStrategy,
}

/// Everything one run of the converter needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub mapping: PathBuf,
    pub options: ConvertOptions,
}

impl ConvertConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            mapping: PathBuf::from(DEFAULT_MAPPING_PATH),
            options: ConvertOptions::default(),
        }
    }
}
