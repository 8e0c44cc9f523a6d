//! Noughts rules - tic-tac-toe game logic with no I/O.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid, placement and win/draw detection
//! - **Lines**: the eight winning triples and which of them pass through a square
//! - **Heuristic**: a greedy computer opponent (win, block, center, corner, any)
//! - **Game**: turn keeping on top of the board (X opens, sides alternate)
//!
//! # Example
//!
//! ```
//! use noughts_rules::{select_move, Board, GameOutcome, Player, Position};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut board = Board::new();
//! board.place(Position::new(0, 0)?, Player::X)?;
//! board.place(Position::new(0, 1)?, Player::X)?;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let block = select_move(&board, Player::O, &mut rng)?;
//! assert_eq!(block, Position::new(0, 2)?);
//! assert_eq!(board.place(block, Player::O)?, GameOutcome::InProgress);
//! # Ok::<(), noughts_rules::RulesError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod error;
mod game;
mod heuristic;
mod lines;
mod outcome;
mod position;
mod types;

pub use action::Move;
pub use board::Board;
pub use error::RulesError;
pub use game::Game;
pub use heuristic::{MoveChoice, Tier, select_move, select_move_with_tier};
pub use lines::Line;
pub use outcome::GameOutcome;
pub use position::{BOARD_SIZE, Position};
pub use types::{Mark, Player};
