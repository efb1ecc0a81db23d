//! One game session: catalog, board and card markers behind a single
//! command handler.

use rand::Rng;

use crate::board::{BoardState, Replacement};
use crate::catalog::Catalog;
use crate::error::BoardError;
use crate::models::{Marker, Position, BOARD_CELLS};

/// Everything the presentation layer can ask of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    FullDraw,
    ReplaceOne(Position),
    SetMarker(Marker),
    ApplyMarker(Position),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Redrawn,
    Replaced(Replacement),
    MarkerSelected(Marker),
    MarkerApplied { position: Position, marker: Marker },
}

pub struct Session {
    catalog: Catalog,
    board: BoardState,
    markers: [Marker; BOARD_CELLS],
    selected: Marker,
}

impl Session {
    /// Start a session with a freshly drawn board.
    pub fn new<R: Rng + ?Sized>(catalog: Catalog, rng: &mut R) -> Self {
        let mut session = Self {
            catalog,
            board: BoardState::new(),
            markers: [Marker::None; BOARD_CELLS],
            selected: Marker::None,
        };
        session.full_draw(rng);
        session
    }

    pub fn dispatch<R: Rng + ?Sized>(
        &mut self,
        command: Command,
        rng: &mut R,
    ) -> Result<Outcome, BoardError> {
        match command {
            Command::FullDraw => {
                self.full_draw(rng);
                Ok(Outcome::Redrawn)
            }
            Command::ReplaceOne(position) => {
                let replacement = self.board.replace_one(&self.catalog, position, rng)?;
                self.markers[position.index()] = Marker::None;
                Ok(Outcome::Replaced(replacement))
            }
            Command::SetMarker(marker) => {
                self.selected = marker;
                Ok(Outcome::MarkerSelected(marker))
            }
            Command::ApplyMarker(position) => {
                if !self.board.is_populated() {
                    return Err(BoardError::NotDrawn);
                }
                self.markers[position.index()] = self.selected;
                Ok(Outcome::MarkerApplied {
                    position,
                    marker: self.selected,
                })
            }
        }
    }

    fn full_draw<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.board.full_draw(&self.catalog, rng);
        self.markers = [Marker::None; BOARD_CELLS];
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn marker(&self, position: Position) -> Marker {
        self.markers[position.index()]
    }

    pub fn selected_marker(&self) -> Marker {
        self.selected
    }

    pub fn available_count(&self) -> usize {
        self.board.available_count(&self.catalog)
    }
}
