//! Turn keeping on top of the board.

use super::{Board, GameOutcome, Move, Player, Position, RulesError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// A single game: the board, whose turn it is, and how it stands.
///
/// X always opens. Sides alternate after every move that leaves the game in
/// progress; once the outcome is terminal no further moves are accepted
/// until [`Game::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    outcome: GameOutcome,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            outcome: GameOutcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Starts over on an empty board.
    #[instrument(skip(self), fields(moves_played = self.history.len()))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.to_move = Player::X;
        self.outcome = GameOutcome::InProgress;
        self.history.clear();
        info!("New game");
    }

    /// Places the mark of the side to move.
    ///
    /// # Errors
    ///
    /// - [`RulesError::GameOver`] if the game has already finished.
    /// - [`RulesError::CellOccupied`] if the square is taken.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn place(&mut self, position: Position) -> Result<GameOutcome, RulesError> {
        if self.outcome.is_terminal() {
            warn!(outcome = %self.outcome, "Move attempted after game end");
            return Err(RulesError::GameOver);
        }

        let player = self.to_move;
        let outcome = self.board.place(position, player)?;
        self.history.push(Move::new(player, position));
        self.outcome = outcome;

        if outcome.is_terminal() {
            info!(%outcome, moves = self.history.len(), "Game finished");
        } else {
            self.to_move = player.opponent();
            debug!(next = %self.to_move, "Turn passes");
        }

        Ok(outcome)
    }

    /// Replays a sequence of squares from a fresh game, alternating sides.
    #[instrument]
    pub fn replay(positions: &[Position]) -> Result<Self, RulesError> {
        let mut game = Self::new();
        for position in positions {
            game.place(*position)?;
        }
        Ok(game)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move. After the game ends, the side that moved last.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the outcome of the latest move.
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// True once the game has a winner or is drawn.
    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
