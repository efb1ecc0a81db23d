//! Error types for the catalog and the board.

use std::path::PathBuf;

use thiserror::Error;

/// Failures loading the word list. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("word list not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read word list: {0}")]
    Parse(#[from] csv::Error),

    #[error("word list must contain at least {required} words, found {found}")]
    InsufficientData { found: usize, required: usize },
}

/// Failures of a board operation. The board is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("no unused words left to swap in")]
    Exhausted,

    #[error("the board has not been drawn yet")]
    NotDrawn,
}
