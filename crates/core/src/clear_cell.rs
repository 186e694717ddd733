//! Clear-cell rules
//!
//! Clicking a colored cell clears it together with every same-colored cell in
//! its 8-neighbourhood, one point per cell. Interior rows left fully empty
//! then collapse. Each animation tick pushes the whole board down one row and
//! spawns a fresh random row at the top; the game ends once the bottom row is
//! entirely empty.

use log::{debug, trace};

use crate::board::Board;
use crate::error::GameError;
use crate::model::GameModel;
use crate::rng::{ColorSource, SimpleRng};
use crate::types::{EMPTY, POINTS_PER_CELL};

/// Engine state for one clear-cell session
#[derive(Debug, Clone)]
pub struct ClearCellGame<C = SimpleRng> {
    board: Board,
    score: u32,
    colors: C,
}

impl ClearCellGame<SimpleRng> {
    /// Create a game backed by the default seeded generator
    pub fn seeded(rows: usize, cols: usize, seed: u32) -> Result<Self, GameError> {
        Self::new(rows, cols, SimpleRng::new(seed))
    }
}

impl<C: ColorSource> ClearCellGame<C> {
    /// Create a game with an empty board and a score of zero
    pub fn new(rows: usize, cols: usize, colors: C) -> Result<Self, GameError> {
        Ok(Self {
            board: Board::new(rows, cols)?,
            score: 0,
            colors,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn colors_mut(&mut self) -> &mut C {
        &mut self.colors
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// True iff every cell of the bottom row is empty
    pub fn is_game_over(&self) -> bool {
        self.board.is_row_empty(self.board.rows() - 1)
    }

    /// Clear (row, col) and its matching neighbours, then collapse empty rows
    ///
    /// Clicking an empty cell scores nothing but still runs the collapse pass.
    pub fn process_cell(&mut self, row: usize, col: usize) -> Result<(), GameError> {
        if row >= self.board.rows() {
            return Err(GameError::InvalidRow {
                row,
                rows: self.board.rows(),
            });
        }
        if col >= self.board.cols() {
            return Err(GameError::InvalidColumn {
                col,
                cols: self.board.cols(),
            });
        }

        let cleared = self.clear_matches(row, col)?;
        if cleared > 0 {
            self.score += cleared * POINTS_PER_CELL;
            trace!("cleared {} cells at ({}, {}), score {}", cleared, row, col, self.score);
        }

        self.collapse_empty_rows();
        Ok(())
    }

    /// Returns the number of cells that went from colored to empty
    fn clear_matches(&mut self, row: usize, col: usize) -> Result<u32, GameError> {
        let Some(color) = self.board.get(row, col)? else {
            return Ok(0);
        };

        let mut cleared = 0;
        for (r, c) in self.board.neighbors(row, col) {
            if self.board.cell(r, c) == Some(color) {
                self.board.put(r, c, EMPTY);
                cleared += 1;
            }
        }

        // The clicked cell goes last so neighbours compare against its color.
        self.board.put(row, col, EMPTY);
        Ok(cleared + 1)
    }

    /// Remove fully empty rows between the spawn row and the bottom row
    ///
    /// Scans from `rows - 2` up to row 1; each empty row found pulls every row
    /// beneath it up by one and leaves the bottom row empty. Row 0 is never a
    /// collapse source. The scan does not revisit an index after shifting, so
    /// with several empty rows the result depends on this order.
    fn collapse_empty_rows(&mut self) {
        let rows = self.board.rows();
        for row in (1..rows.saturating_sub(1)).rev() {
            if self.board.is_row_empty(row) {
                debug!("collapsing empty row {}", row);
                self.board.shift_rows_up(row);
            }
        }
    }

    /// Shift the board down one row and spawn a random top row
    ///
    /// Only colored cells are copied down; an empty cell leaves the cell below
    /// it untouched. The previous bottom row is overwritten. No-op once the
    /// game is over.
    pub fn next_animation_step(&mut self) {
        if self.is_game_over() {
            return;
        }

        let rows = self.board.rows();
        let cols = self.board.cols();
        for row in (0..rows.saturating_sub(1)).rev() {
            for col in 0..cols {
                if let Some(color) = self.board.cell(row, col) {
                    self.board.put(row + 1, col, Some(color));
                }
                if row == 0 {
                    let fresh = self.colors.next_color();
                    self.board.put(0, col, Some(fresh));
                }
            }
        }
        debug!("gravity step applied, game over: {}", self.is_game_over());
    }
}

impl<C: ColorSource> GameModel for ClearCellGame<C> {
    fn board(&self) -> &Board {
        &self.board
    }

    fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    fn is_game_over(&self) -> bool {
        ClearCellGame::is_game_over(self)
    }

    fn score(&self) -> u32 {
        self.score
    }

    fn process_cell(&mut self, row: usize, col: usize) -> Result<(), GameError> {
        ClearCellGame::process_cell(self, row, col)
    }

    fn next_animation_step(&mut self) {
        ClearCellGame::next_animation_step(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, Color};

    const G: Cell = Some(Color::Green);
    const B: Cell = Some(Color::Blue);
    const R: Cell = Some(Color::Red);
    const E: Cell = EMPTY;

    fn game_with(rows: Vec<Vec<Cell>>) -> ClearCellGame {
        let board = Board::from_rows(rows);
        let mut game = ClearCellGame::seeded(board.rows(), board.cols(), 1).unwrap();
        game.board = board;
        game
    }

    /// Generator that always hands out the same color
    struct Fixed(Color);

    impl ColorSource for Fixed {
        fn next_color(&mut self) -> Color {
            self.0
        }
    }

    #[test]
    fn test_only_matching_neighbors_are_cleared() {
        let mut game = game_with(vec![
            vec![G, B, G],
            vec![R, G, B],
            vec![G, G, R],
        ]);
        game.process_cell(1, 1).unwrap();

        // Four green neighbours plus the clicked cell.
        assert_eq!(game.score(), 5);
        assert_eq!(
            game.board.to_rows(),
            vec![vec![E, B, E], vec![R, E, B], vec![E, E, R]]
        );
    }

    #[test]
    fn test_lone_cell_still_scores_one() {
        let mut game = game_with(vec![
            vec![B, B, B],
            vec![B, G, B],
            vec![B, B, B],
        ]);
        game.process_cell(1, 1).unwrap();
        assert_eq!(game.score(), 1);
        assert_eq!(game.board.get(1, 1), Ok(EMPTY));
    }

    #[test]
    fn test_empty_target_scores_nothing_but_collapses() {
        let mut game = game_with(vec![
            vec![G, G],
            vec![E, E],
            vec![B, E],
            vec![R, R],
        ]);
        game.process_cell(1, 0).unwrap();
        assert_eq!(game.score(), 0);
        assert_eq!(
            game.board.to_rows(),
            vec![vec![G, G], vec![B, E], vec![R, R], vec![E, E]]
        );
    }

    #[test]
    fn test_collapse_skips_spawn_row() {
        let mut game = game_with(vec![vec![E, E], vec![G, G], vec![B, B]]);
        game.process_cell(2, 0).unwrap();
        // Row 0 stays empty, row 2 is the bottom and is never a source.
        assert_eq!(game.board.to_rows(), vec![vec![E, E], vec![G, G], vec![E, E]]);
        assert!(game.is_game_over());
    }

    #[test]
    fn test_adjacent_empty_rows_both_collapse() {
        let mut game = game_with(vec![
            vec![R, R],
            vec![E, E],
            vec![E, E],
            vec![G, G],
            vec![B, B],
        ]);
        game.process_cell(0, 0).unwrap();
        // Clicking row 0 clears it as well; rows 1 and 2 collapse.
        assert_eq!(
            game.board.to_rows(),
            vec![vec![E, E], vec![G, G], vec![B, B], vec![E, E], vec![E, E]]
        );
    }

    #[test]
    fn test_invalid_row_checked_before_column() {
        let mut game = ClearCellGame::seeded(4, 4, 1).unwrap();
        assert!(game.process_cell(4, 9).unwrap_err().is_invalid_row());
        assert!(game.process_cell(3, 4).unwrap_err().is_invalid_column());
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_gravity_shifts_and_spawns() {
        let board = Board::from_rows(vec![vec![G, E], vec![E, B], vec![R, R]]);
        let mut game = ClearCellGame::new(3, 2, Fixed(Color::Yellow)).unwrap();
        game.board = board;
        game.next_animation_step();

        let y = Some(Color::Yellow);
        // Empty cells do not overwrite the cell below them.
        assert_eq!(
            game.board.to_rows(),
            vec![vec![y, y], vec![G, B], vec![R, B]]
        );
    }

    #[test]
    fn test_gravity_is_noop_when_over() {
        let mut game = ClearCellGame::new(3, 2, Fixed(Color::Red)).unwrap();
        game.board.set(0, 0, G).unwrap();
        let before = game.board.clone();
        game.next_animation_step();
        assert_eq!(game.board, before);
    }

    #[test]
    fn test_single_row_board() {
        let mut game = ClearCellGame::new(1, 3, Fixed(Color::Red)).unwrap();
        game.board.fill(G);
        game.next_animation_step();
        assert_eq!(game.board.to_rows(), vec![vec![G, G, G]]);

        game.process_cell(0, 0).unwrap();
        assert_eq!(game.score(), 2);
        assert!(!game.is_game_over());
    }

    #[test]
    fn test_separated_empty_rows_collapse_in_scan_order() {
        let y = Some(Color::Yellow);
        let mut game = game_with(vec![
            vec![R, R],
            vec![E, E],
            vec![G, G],
            vec![E, E],
            vec![B, B],
            vec![y, y],
        ]);
        game.process_cell(5, 0).unwrap();

        assert_eq!(game.score(), 2);
        assert_eq!(
            game.board.to_rows(),
            vec![
                vec![R, R],
                vec![G, G],
                vec![B, B],
                vec![E, E],
                vec![E, E],
                vec![E, E],
            ]
        );
        assert!(game.is_game_over());
    }
}
