use serde::{Deserialize, Serialize};

use crate::model::GameModel;
use crate::types::cell_code;

/// Plain-data copy of a model's observable state
///
/// `cells` holds one vector per row; 0 is empty and 1-4 are color codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<Vec<u8>>,
    pub score: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn capture<M: GameModel + ?Sized>(model: &M) -> Self {
        let board = model.board();
        Self {
            rows: board.rows(),
            cols: board.cols(),
            cells: board
                .iter_rows()
                .map(|row| row.iter().map(|&cell| cell_code(cell)).collect())
                .collect(),
            score: model.score(),
            game_over: model.is_game_over(),
        }
    }

    /// Number of colored cells
    pub fn filled(&self) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|&&code| code != 0).count())
            .sum()
    }
}
