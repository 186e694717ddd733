//! Game model abstraction.
//!
//! A rule variant owns a [`Board`] and decides how clicks and animation ticks
//! transform it. Rendering layers and the script runner only talk to this
//! trait, so alternative variants can be dropped in.

use crate::board::Board;
use crate::error::GameError;
use crate::types::Cell;

pub trait GameModel {
    fn board(&self) -> &Board;

    fn board_mut(&mut self) -> &mut Board;

    fn rows(&self) -> usize {
        self.board().rows()
    }

    fn cols(&self) -> usize {
        self.board().cols()
    }

    fn get_cell(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        self.board().get(row, col)
    }

    fn set_cell(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), GameError> {
        self.board_mut().set(row, col, cell)
    }

    /// Sole termination predicate of the variant
    fn is_game_over(&self) -> bool;

    fn score(&self) -> u32;

    /// Handle a click on (row, col)
    fn process_cell(&mut self, row: usize, col: usize) -> Result<(), GameError>;

    /// Advance the animation by one tick
    fn next_animation_step(&mut self);
}
