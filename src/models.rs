//! Data models for word cards, board positions and markers.

use ratatui::style::Color;

/// Cells per side of the board.
pub const GRID_SIZE: usize = 5;

/// Cards shown on a full board.
pub const BOARD_CELLS: usize = GRID_SIZE * GRID_SIZE;

/// A single word card: front text and back text (e.g. two languages).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordPair {
    pub front: String,
    pub back: String,
}

impl WordPair {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }
}

impl std::fmt::Display for WordPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}", self.front, self.back)
    }
}

/// A cell on the board, always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < GRID_SIZE && col < GRID_SIZE).then_some(Self { row, col })
    }

    /// Position of the `index`-th cell in row-major order.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::new(index / GRID_SIZE, index % GRID_SIZE)
    }

    pub fn index(&self) -> usize {
        self.row * GRID_SIZE + self.col
    }

    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_CELLS).filter_map(Self::from_index)
    }

    // Cursor movement clamps at the edges.

    pub fn up(self) -> Self {
        Self {
            row: self.row.saturating_sub(1),
            ..self
        }
    }

    pub fn down(self) -> Self {
        Self {
            row: (self.row + 1).min(GRID_SIZE - 1),
            ..self
        }
    }

    pub fn left(self) -> Self {
        Self {
            col: self.col.saturating_sub(1),
            ..self
        }
    }

    pub fn right(self) -> Self {
        Self {
            col: (self.col + 1).min(GRID_SIZE - 1),
            ..self
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self { row: 0, col: 0 }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row + 1, self.col + 1)
    }
}

/// Team-color annotation on a card. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Marker {
    #[default]
    None,
    Blue,
    Red,
    Beige,
    Bomb,
}

impl Marker {
    pub const ALL: [Marker; 5] = [
        Marker::None,
        Marker::Blue,
        Marker::Red,
        Marker::Beige,
        Marker::Bomb,
    ];

    pub fn from_key(c: char) -> Option<Self> {
        match c {
            '1' => Some(Self::None),
            '2' => Some(Self::Blue),
            '3' => Some(Self::Red),
            '4' => Some(Self::Beige),
            '5' => Some(Self::Bomb),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Blue => "Blue",
            Self::Red => "Red",
            Self::Beige => "Beige",
            Self::Bomb => "Bomb",
        }
    }

    /// Fill color for a card carrying this marker.
    pub fn color(&self) -> Color {
        match self {
            Self::None => Color::Rgb(0xf0, 0xf0, 0xf0),
            Self::Blue => Color::Rgb(0x4a, 0x90, 0xe2),
            Self::Red => Color::Rgb(0xd0, 0x02, 0x1b),
            Self::Beige => Color::Rgb(0xf5, 0xe6, 0xc8),
            Self::Bomb => Color::Rgb(0x4a, 0x4a, 0x4a),
        }
    }

    /// Label color in the marker selector. Card text is always black.
    pub fn label_color(&self) -> Color {
        match self {
            Self::Blue | Self::Red | Self::Bomb => Color::White,
            Self::None | Self::Beige => Color::Black,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_rejects_out_of_range() {
        assert!(Position::new(4, 4).is_some());
        assert!(Position::new(5, 0).is_none());
        assert!(Position::new(0, 5).is_none());
        assert!(Position::from_index(BOARD_CELLS).is_none());
    }

    #[test]
    fn position_index_is_row_major() {
        let p = Position::new(2, 3).unwrap();
        assert_eq!(p.index(), 13);
        assert_eq!(Position::from_index(13), Some(p));
        assert_eq!(Position::all().count(), BOARD_CELLS);
    }

    #[test]
    fn cursor_movement_clamps() {
        let origin = Position::default();
        assert_eq!(origin.up(), origin);
        assert_eq!(origin.left(), origin);
        let corner = Position::new(4, 4).unwrap();
        assert_eq!(corner.down(), corner);
        assert_eq!(corner.right(), corner);
        assert_eq!(origin.down().right(), Position::new(1, 1).unwrap());
    }

    #[test]
    fn word_pairs_compare_by_both_fields() {
        assert_eq!(WordPair::new("sea", "바다"), WordPair::new("sea", "바다"));
        assert_ne!(WordPair::new("sea", "바다"), WordPair::new("sea", "해"));
    }

    #[test]
    fn marker_keys_cover_every_marker() {
        let from_keys: Vec<Marker> = ('1'..='5').filter_map(Marker::from_key).collect();
        assert_eq!(from_keys, Marker::ALL);
        assert_eq!(Marker::from_key('6'), None);
    }

    #[test]
    fn dark_markers_use_white_labels() {
        assert_eq!(Marker::Bomb.label_color(), Color::White);
        assert_eq!(Marker::Beige.label_color(), Color::Black);
    }
}
