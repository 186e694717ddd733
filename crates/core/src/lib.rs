//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the clear-cell rules and the board they operate on.
//! It has no dependencies on UI, timers, or I/O, which makes it:
//!
//! - **Deterministic**: Same seed produces the same spawn rows (for replays)
//! - **Testable**: Every rule is reachable through plain method calls
//! - **Portable**: Any rendering layer can sit on top of [`GameModel`]
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size grid with bounds-checked access and row shifting
//! - [`clear_cell`]: the clear-cell rule variant (matching, collapse, gravity)
//! - [`error`]: rejected coordinates and dimensions
//! - [`model`]: the [`GameModel`] trait every rule variant implements
//! - [`rng`]: seeded color generation behind the [`ColorSource`] trait
//! - [`snapshot`]: serializable copies of a model's state
//!
//! # Game Rules
//!
//! - **Click**: the clicked cell and every same-colored cell among its eight
//!   neighbours are cleared, one point each
//! - **Collapse**: interior rows left fully empty are removed by pulling the
//!   rows beneath them up
//! - **Gravity**: each animation step moves the board down one row and
//!   spawns a random row at the top
//! - **Game over**: the bottom row is entirely empty
//!
//! # Example
//!
//! ```
//! use clear_cell_core::ClearCellGame;
//! use clear_cell_types::Color;
//!
//! let mut game = ClearCellGame::seeded(32, 57, 1).unwrap();
//! game.board_mut().fill(Some(Color::Green));
//!
//! // Interior click on a uniform board clears a full 3x3 block.
//! game.process_cell(10, 15).unwrap();
//! assert_eq!(game.score(), 9);
//! assert!(!game.is_game_over());
//! ```

pub mod board;
pub mod clear_cell;
pub mod error;
pub mod model;
pub mod rng;
pub mod snapshot;

pub use clear_cell_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use clear_cell::ClearCellGame;
pub use error::GameError;
pub use model::GameModel;
pub use rng::{ColorSource, SimpleRng};
pub use snapshot::GameSnapshot;
