//! Perfect-play tic-tac-toe.
//!
//! A 3x3 board, the rules that decide when a game is over, and an exhaustive
//! minimax search that picks moves for a computer opponent that never loses.
//!
//! # Architecture
//!
//! - **Board**: nine [`Square`]s in row-major order, addressed by [`Position`]
//! - **Rules**: [`winner`], [`is_draw`] and [`status`], pure and non-mutating
//! - **Search**: [`minimax`] values a position; [`best_move`] picks the computer's move
//!
//! # Example
//!
//! ```
//! use perfect_tictactoe::{best_move, Board, Position};
//!
//! // Human (X) threatens the main diagonal; the computer (O) must block.
//! let mut board: Board = "XO./.X./O..".parse()?;
//! assert_eq!(best_move(&mut board)?, Position::BottomRight);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod position;
mod rules;
mod search;
mod types;

pub use error::{BoardParseError, MoveError, SearchError};
pub use position::Position;
pub use rules::{is_draw, status, win::LINES, winner};
pub use search::{Outcome, best_move, best_move_for, evaluate_moves, minimax};
pub use types::{Board, GameStatus, Player, Square};
