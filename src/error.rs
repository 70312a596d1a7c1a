use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a whole conversion.
///
/// Problems with individual rows never end up here, see [`crate::import::SkipReason`].
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Reading the input or writing the output failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The mapping file exists but isn't a valid mapping document
    #[error("Failed to load mapping from {}: {source}", path.display())]
    Mapping {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// At least one required column couldn't be found in the header row
    #[error("Required column not found in CSV. Headers found: {headers:?}")]
    MissingColumn { headers: Vec<String> },

    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {l}")).unwrap_or_default())]
    Parse { line: Option<u64>, message: String },
}

impl ConvertError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConvertError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(line: Option<u64>, message: impl Into<String>) -> Self {
        ConvertError::Parse {
            line,
            message: message.into(),
        }
    }
}

impl From<csv::Error> for ConvertError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());
        ConvertError::Parse {
            line,
            message: error.to_string(),
        }
    }
}

pub type Result<T, E = ConvertError> = std::result::Result<T, E>;
