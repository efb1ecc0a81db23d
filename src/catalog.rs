//! The word list every board is drawn from.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::error::CatalogError;
use crate::models::{WordPair, BOARD_CELLS};

/// Immutable, deduplicated list of word pairs. Always holds at least one
/// full board's worth of entries.
#[derive(Debug, Clone)]
pub struct Catalog {
    pairs: Vec<WordPair>,
}

/// What a parse pass saw, for logging.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct LoadSummary {
    short_rows: usize,
    duplicates: usize,
}

impl Catalog {
    /// Load a word list from a CSV file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::error!(path = %path.display(), "word list not found");
                return Err(CatalogError::NotFound {
                    path: path.to_path_buf(),
                });
            }
            Err(err) => return Err(csv::Error::from(err).into()),
        };

        let catalog = Self::from_reader(file)?;
        tracing::info!(
            path = %path.display(),
            words = catalog.len(),
            "loaded word list"
        );
        Ok(catalog)
    }

    /// Parse CSV rows of `front,back[,ignored...]`. No header row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut pairs = Vec::new();
        let mut short_rows = 0;
        for result in csv_reader.records() {
            let record = result?;
            match (record.get(0), record.get(1)) {
                (Some(front), Some(back)) => pairs.push(WordPair::new(front.trim(), back.trim())),
                _ => short_rows += 1,
            }
        }

        let (catalog, summary) = Self::build(pairs)?;
        let summary = LoadSummary {
            short_rows,
            ..summary
        };
        if summary.short_rows > 0 || summary.duplicates > 0 {
            tracing::debug!(
                skipped = summary.short_rows,
                duplicates = summary.duplicates,
                "ignored rows in word list"
            );
        }
        Ok(catalog)
    }

    /// Build a catalog from pairs already in memory.
    #[cfg(test)]
    pub fn from_pairs(pairs: Vec<WordPair>) -> Result<Self, CatalogError> {
        Self::build(pairs).map(|(catalog, _)| catalog)
    }

    fn build(pairs: Vec<WordPair>) -> Result<(Self, LoadSummary), CatalogError> {
        // Keep the first occurrence of each exact duplicate.
        let mut seen = HashSet::with_capacity(pairs.len());
        let total = pairs.len();
        let pairs: Vec<WordPair> = pairs
            .into_iter()
            .filter(|pair| seen.insert(pair.clone()))
            .collect();
        let summary = LoadSummary {
            short_rows: 0,
            duplicates: total - pairs.len(),
        };

        if pairs.len() < BOARD_CELLS {
            tracing::error!(found = pairs.len(), "word list too small for a board");
            return Err(CatalogError::InsufficientData {
                found: pairs.len(),
                required: BOARD_CELLS,
            });
        }

        Ok((Self { pairs }, summary))
    }

    pub fn pairs(&self) -> &[WordPair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn get(&self, index: usize) -> Option<&WordPair> {
        self.pairs.get(index)
    }
}
