//! A game-tree search agent for 4x4 tic-tac-toe
//!
//! Any full row, column or diagonal of four wins. The agent uses a depth
//! limited negamax search with alpha-beta pruning, driven by a pluggable
//! heuristic evaluator, and reports statistics about the explored tree.
//!
//! # Basic Usage
//!
//! ```
//! use tictactoe4_ai::{board::{Board, Move, Symbol}, evaluator::line_tally, solver::Solver};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let board: Board = "XXX. OO.. .... ....".parse()?;
//! let solver = Solver::new(board, line_tally);
//! let (best_move, stats) = solver.find_best_move(Symbol::X, 2)?;
//!
//! assert_eq!(best_move, Move::new(Symbol::X, 3));
//! assert_eq!(stats.score, 1000);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod error;

pub mod board;

pub mod evaluator;

pub mod solver;

pub mod arena;


/// The width of the game board in tiles
pub const WIDTH: usize = 4;

/// The height of the game board in tiles
pub const HEIGHT: usize = 4;

/// The number of cells on the board
pub const CELLS: usize = WIDTH * HEIGHT;

/// The number of winning lines: every row, every column and both diagonals
pub const NUM_LINES: usize = HEIGHT + WIDTH + 2;

// the two diagonals only span the whole board when it is square
const_assert_eq!(WIDTH, HEIGHT);
