// src/error.rs
use pomsort_order::{SortError, TemplateError};
use pomsort_tree::TreeError;
use std::path::PathBuf;
use thiserror::Error;

/// A comprehensive error type for loading, classifying and sorting documents.
#[derive(Error, Debug)]
pub enum PomSortError {
    #[error("Sorting failed: {0}")]
    Sort(#[from] SortError),

    #[error("Parsing failed: {0}")]
    Parse(#[from] TreeError),

    #[error("Failed to decode '{}': {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: TemplateError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration is invalid: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<TemplateError> for PomSortError {
    fn from(e: TemplateError) -> Self {
        PomSortError::Sort(SortError::Template(e))
    }
}
