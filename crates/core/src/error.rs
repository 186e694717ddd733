//! Errors raised by the rule engine.
//!
//! Coordinates are validated row first, then column, so a call with both
//! indices out of range always reports the row.

/// Rejected argument to a board or engine operation
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid row index: {row} (board has {rows} rows)")]
    InvalidRow { row: usize, rows: usize },
    #[error("Invalid column index: {col} (board has {cols} columns)")]
    InvalidColumn { col: usize, cols: usize },
    #[error("Invalid board dimensions: {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
}

impl GameError {
    pub fn is_invalid_row(&self) -> bool {
        matches!(self, GameError::InvalidRow { .. })
    }

    pub fn is_invalid_column(&self) -> bool {
        matches!(self, GameError::InvalidColumn { .. })
    }
}
