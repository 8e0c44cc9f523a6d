//! The 3x3 board and win/draw detection.

use super::{BOARD_SIZE, GameOutcome, Line, Mark, Player, Position, RulesError};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// 3x3 tic-tac-toe board.
///
/// Squares only change through [`Board::place`], which refuses occupied
/// squares, and [`Board::reset`], which clears everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears every square.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
        debug!("Board cleared");
    }

    /// Gets the mark at the given position.
    pub fn get(&self, pos: Position) -> Mark {
        self.cells[pos.row()][pos.col()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Places a player's mark and evaluates the resulting outcome.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::CellOccupied`] if the square already holds a
    /// mark; the board is left unchanged.
    #[instrument(skip_all, fields(position = %pos, player = %player))]
    pub fn place(&mut self, pos: Position, player: Player) -> Result<GameOutcome, RulesError> {
        if !self.is_empty(pos) {
            warn!(occupant = ?self.get(pos), "Rejected placement on occupied square");
            return Err(RulesError::CellOccupied(pos));
        }

        self.cells[pos.row()][pos.col()] = player.into();

        let outcome = if self.has_line(player.into(), pos) {
            GameOutcome::win_for(player)
        } else if self.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        };

        debug!(%outcome, "Placement evaluated");
        Ok(outcome)
    }

    /// Checks whether `mark` fills a line through `pos`.
    ///
    /// Only the row, column and diagonals through `pos` are inspected, so this
    /// answers "did a move here complete a line" without scanning the board.
    pub fn has_line(&self, mark: Mark, pos: Position) -> bool {
        if mark.is_empty() {
            return false;
        }
        Line::through(pos).any(|line| self.line_filled_by(line, mark))
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|mark| !mark.is_empty())
    }

    /// Empty squares in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Scans all eight lines for a winner.
    pub fn winner(&self) -> Option<Player> {
        Line::ALL.into_iter().find_map(|line| {
            let [a, _, _] = line.positions();
            let mark = self.get(a);
            if self.line_filled_by(line, mark) {
                mark.player()
            } else {
                None
            }
        })
    }

    /// Copy of this board with `player` written at `pos`, for trial moves.
    pub(crate) fn with_trial(&self, pos: Position, player: Player) -> Board {
        let mut trial = *self;
        trial.cells[pos.row()][pos.col()] = player.into();
        trial
    }

    fn line_filled_by(&self, line: Line, mark: Mark) -> bool {
        !mark.is_empty() && line.positions().iter().all(|p| self.get(*p) == mark)
    }
}

/// Renders rows like `X|O|3`, separated by `-+-+-`. Empty squares show
/// their keypad digit.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, mark) in cells.iter().enumerate() {
                match mark {
                    Mark::Empty => write!(f, "{}", row * BOARD_SIZE + col + 1)?,
                    Mark::X => write!(f, "X")?,
                    Mark::O => write!(f, "O")?,
                }
                if col < BOARD_SIZE - 1 {
                    write!(f, "|")?;
                }
            }
            if row < BOARD_SIZE - 1 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
