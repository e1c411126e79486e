use std::fmt;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wordfreq_core::{AllocationError, InvalidWord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `<count>\t<word>` line per entry.
    #[default]
    Tsv,
    Json,
    /// Only the total number of words.
    Total,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Tsv => write!(f, "tsv"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Total => write!(f, "total"),
        }
    }
}

#[derive(Debug, Error)]
pub enum TokenizeError {
    #[error("input stream error: {0}")]
    Stream(#[source] io::Error),
    #[error("word longer than {max_len} letters")]
    WordTooLong { max_len: usize },
    #[error("tokenizer built an invalid word: {0}")]
    Malformed(#[source] InvalidWord),
}

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[source] serde_json::Error),
}

impl From<serde_json::Error> for OutputError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            OutputError::Io(err.into())
        } else {
            OutputError::Json(err)
        }
    }
}

#[derive(Debug, Error)]
pub enum CountError {
    #[error("out of memory: {0}")]
    Allocation(#[from] AllocationError),
    #[error("input stream error: {0}")]
    Stream(#[source] io::Error),
    #[error("word longer than {max_len} letters")]
    WordTooLong { max_len: usize },
    #[error("failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("output error: {0}")]
    Output(#[from] OutputError),
    #[error("tokenizer built an invalid word: {0}")]
    Malformed(#[source] InvalidWord),
}

impl From<TokenizeError> for CountError {
    fn from(err: TokenizeError) -> Self {
        match err {
            TokenizeError::Stream(source) => CountError::Stream(source),
            TokenizeError::WordTooLong { max_len } => CountError::WordTooLong { max_len },
            TokenizeError::Malformed(err) => CountError::Malformed(err),
        }
    }
}
