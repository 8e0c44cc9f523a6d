//! Noughts - tic-tac-toe sessions for the terminal.
//!
//! Builds on [`noughts_rules`] to provide everything around a game:
//!
//! - **Config**: mode, player names and computer timing, loadable from TOML
//! - **Session**: one board, two named sides, the computer's random source
//! - **Scheduler**: the cancellable pause before the computer moves
//! - **Console**: a line-based front end
//! - **Simulate**: computer-versus-computer batches
//!
//! # Example
//!
//! ```
//! use noughts::{GameMode, Session, SessionConfig};
//! use noughts_rules::Position;
//!
//! let config = SessionConfig::default()
//!     .with_mode(GameMode::PlayerVsComputer)
//!     .with_seed(Some(1));
//! let mut session = Session::new(config);
//!
//! session.human_move(Position::CENTER)?;
//! assert!(session.is_computer_turn());
//! let turn = session.computer_move()?;
//! assert!(turn.position.is_corner());
//! # Ok::<(), noughts::SessionError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
pub mod console;
mod scheduler;
mod session;
mod simulate;

pub use config::{ConfigError, GameMode, SessionConfig};
pub use scheduler::{MoveScheduler, TurnEvent};
pub use session::{ComputerTurn, Session, SessionError};
pub use simulate::{Tally, simulate};
