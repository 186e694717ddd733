//! Core types module - shared data structures and constants
//!
//! This module defines the vocabulary shared by the rule engine, the script
//! runner and any rendering layer sitting on top of them. Everything here is
//! plain data with no external dependencies.
//!
//! # Board Dimensions
//!
//! Boards are sized at construction. The defaults match the classic
//! clear-cell playfield:
//!
//! - **Rows**: 32 (indexed 0-31, row 0 is the spawn row at the top)
//! - **Columns**: 57 (indexed 0-56)
//!
//! # Cells
//!
//! A [`Cell`] is either `Some(Color)` or [`EMPTY`]. Equality is by tag, so two
//! green cells always match each other.
//!
//! # Examples
//!
//! ```
//! use clear_cell_types::{Color, Cell, EMPTY, NEIGHBOR_OFFSETS};
//!
//! // Parse from string (case-insensitive, full name or initial)
//! assert_eq!(Color::from_str("green"), Some(Color::Green));
//! assert_eq!(Color::from_str("B"), Some(Color::Blue));
//!
//! let cell: Cell = Some(Color::Red);
//! assert_ne!(cell, EMPTY);
//!
//! // Eight neighbours: orthogonal and diagonal
//! assert_eq!(NEIGHBOR_OFFSETS.len(), 8);
//! ```

/// Default board height (32 rows)
pub const DEFAULT_ROWS: usize = 32;

/// Default board width (57 columns)
pub const DEFAULT_COLS: usize = 57;

/// Default seed for the color generator
pub const DEFAULT_SEED: u32 = 1;

/// Points awarded for every cell cleared, including the clicked one
pub const POINTS_PER_CELL: u32 = 1;

/// Row/column offsets of the 8-neighbourhood.
///
/// Order: the three cells above (left to right), the three below, then left
/// and right. Clearing does not depend on the order since every neighbour is
/// compared against the clicked cell's original color.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, -1),
    (0, 1),
];

/// The non-empty cell colors
///
/// The color generator picks uniformly among these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
}

impl Color {
    /// Every color, in code order
    pub const ALL: [Color; 4] = [Color::Red, Color::Green, Color::Blue, Color::Yellow];

    /// Number of distinct colors
    pub const COUNT: usize = Self::ALL.len();

    /// Parse color from string (case-insensitive)
    ///
    /// Accepts full names or initials.
    ///
    /// # Examples
    ///
    /// ```
    /// use clear_cell_types::Color;
    ///
    /// assert_eq!(Color::from_str("red"), Some(Color::Red));
    /// assert_eq!(Color::from_str("Y"), Some(Color::Yellow));
    /// assert_eq!(Color::from_str("purple"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" | "r" => Some(Color::Red),
            "green" | "g" => Some(Color::Green),
            "blue" | "b" => Some(Color::Blue),
            "yellow" | "y" => Some(Color::Yellow),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
        }
    }

    /// Single uppercase initial, used by the text board dump
    pub fn as_char(&self) -> char {
        match self {
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Yellow => 'Y',
        }
    }

    /// Numeric code for snapshots (1-4, 0 is reserved for empty)
    pub fn code(&self) -> u8 {
        match self {
            Color::Red => 1,
            Color::Green => 2,
            Color::Blue => 3,
            Color::Yellow => 4,
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Color)`: Cell filled with the specified color
pub type Cell = Option<Color>;

/// The empty sentinel
pub const EMPTY: Cell = None;

/// Snapshot code of a cell (0 for empty)
pub fn cell_code(cell: Cell) -> u8 {
    cell.map_or(0, |color| color.code())
}

/// Text glyph of a cell (`.` for empty)
pub fn cell_char(cell: Cell) -> char {
    cell.map_or('.', |color| color.as_char())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_codes_are_distinct_and_non_zero() {
        let mut codes: Vec<u8> = Color::ALL.iter().map(|c| c.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), Color::COUNT);
        assert!(!codes.contains(&0));
    }

    #[test]
    fn color_round_trips_through_name_and_initial() {
        for color in Color::ALL {
            assert_eq!(Color::from_str(color.as_str()), Some(color));
            let initial = color.as_char().to_string();
            assert_eq!(Color::from_str(&initial), Some(color));
        }
    }

    #[test]
    fn empty_cell_renders_as_zero_and_dot() {
        assert_eq!(cell_code(EMPTY), 0);
        assert_eq!(cell_char(EMPTY), '.');
        assert_eq!(cell_char(Some(Color::Green)), 'G');
    }

    #[test]
    fn neighbor_offsets_cover_ring_without_center() {
        assert!(!NEIGHBOR_OFFSETS.contains(&(0, 0)));
        for dr in -1..=1 {
            for dc in -1..=1 {
                if (dr, dc) != (0, 0) {
                    assert!(NEIGHBOR_OFFSETS.contains(&(dr, dc)));
                }
            }
        }
    }
}
