//! Result of the latest placement.

use super::Player;
use serde::{Deserialize, Serialize};

/// Classification of a board after a move.
///
/// Derived from the board, never stored independently of it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
pub enum GameOutcome {
    /// Moves remain and nobody has a line.
    #[default]
    #[display("In progress")]
    InProgress,
    /// Board full, no line.
    #[display("Draw")]
    Draw,
    /// X completed a line.
    #[display("X wins")]
    XWins,
    /// O completed a line.
    #[display("O wins")]
    OWins,
}

impl GameOutcome {
    /// The winning outcome for a player.
    pub fn win_for(player: Player) -> Self {
        match player {
            Player::X => GameOutcome::XWins,
            Player::O => GameOutcome::OWins,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameOutcome::XWins => Some(Player::X),
            GameOutcome::OWins => Some(Player::O),
            GameOutcome::InProgress | GameOutcome::Draw => None,
        }
    }

    /// True once no further moves are accepted.
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::InProgress
    }
}
