//! Word pool bookkeeping for the 5×5 board.
//!
//! The board keeps the 25 displayed pairs in row-major order together with
//! the set of pairs currently in play. Draws never repeat a pair that is
//! already on the board, and replacing a card frees exactly the pair that
//! was in that cell.

use std::collections::HashSet;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::catalog::Catalog;
use crate::error::BoardError;
use crate::models::{Position, WordPair, BOARD_CELLS};

/// Result of a successful single-card replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub position: Position,
    pub removed: WordPair,
    pub added: WordPair,
}

#[derive(Debug, Clone, Default)]
pub struct BoardState {
    // Empty until the first draw, then exactly BOARD_CELLS long.
    grid: Vec<WordPair>,
    in_play: HashSet<WordPair>,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_populated(&self) -> bool {
        !self.grid.is_empty()
    }

    /// Replace the whole board with 25 distinct pairs sampled uniformly.
    pub fn full_draw<R: Rng + ?Sized>(&mut self, catalog: &Catalog, rng: &mut R) {
        let sample = rand::seq::index::sample(rng, catalog.len(), BOARD_CELLS);
        let grid: Vec<WordPair> = sample
            .into_iter()
            .filter_map(|i| catalog.get(i).cloned())
            .collect();

        self.in_play = grid.iter().cloned().collect();
        self.grid = grid;
        debug_assert_eq!(self.in_play.len(), BOARD_CELLS);

        tracing::debug!(catalog = catalog.len(), "drew a full board");
    }

    /// Swap the card at `position` for a pair that is not on the board.
    pub fn replace_one<R: Rng + ?Sized>(
        &mut self,
        catalog: &Catalog,
        position: Position,
        rng: &mut R,
    ) -> Result<Replacement, BoardError> {
        if !self.is_populated() {
            return Err(BoardError::NotDrawn);
        }

        let available: Vec<&WordPair> = catalog
            .pairs()
            .iter()
            .filter(|pair| !self.in_play.contains(*pair))
            .collect();
        let Some(&added) = available.choose(rng) else {
            tracing::warn!(%position, "no unused words left for replacement");
            return Err(BoardError::Exhausted);
        };
        let added = added.clone();

        // Free the exact pair in this cell, not just anything sharing its front.
        let removed = std::mem::replace(&mut self.grid[position.index()], added.clone());
        self.in_play.remove(&removed);
        self.in_play.insert(added.clone());
        debug_assert_eq!(self.in_play.len(), BOARD_CELLS);

        tracing::info!(%position, removed = %removed, added = %added, "replaced card");
        Ok(Replacement {
            position,
            removed,
            added,
        })
    }

    pub fn cell(&self, position: Position) -> Option<&WordPair> {
        self.grid.get(position.index())
    }

    /// All cells in row-major order with their positions.
    pub fn cells(&self) -> impl Iterator<Item = (Position, &WordPair)> {
        Position::all().zip(self.grid.iter())
    }

    #[cfg(test)]
    pub fn in_play(&self) -> &HashSet<WordPair> {
        &self.in_play
    }

    /// How many catalog pairs could still be swapped in.
    pub fn available_count(&self, catalog: &Catalog) -> usize {
        catalog
            .pairs()
            .iter()
            .filter(|pair| !self.in_play.contains(*pair))
            .count()
    }
}
