//! Greedy computer opponent.
//!
//! Moves are chosen by the first tier that yields one:
//!
//! 1. **Win-now**: complete one of our own lines.
//! 2. **Block**: occupy the square that would complete an opponent line.
//! 3. **Center**: take the middle square.
//! 4. **Corner**: a random free corner.
//! 5. **Any**: a random free square.
//!
//! The first two tiers scan squares in row-major order. Randomness only
//! breaks ties in the last two, and comes from the caller so that seeded
//! generators give reproducible games.

use super::{Board, Player, Position, RulesError};
use rand::Rng;
use tracing::{debug, instrument, warn};

/// Which rule produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Tier {
    /// Completes a line for the mover.
    WinNow,
    /// Denies the opponent a completed line.
    Block,
    /// Takes the center square.
    Center,
    /// Takes a free corner.
    Corner,
    /// Takes any free square.
    Any,
}

/// A selected square together with the tier that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveChoice {
    /// Square to play.
    pub position: Position,
    /// Rule that picked it.
    pub tier: Tier,
}

/// Chooses a square for `player` without modifying `board`.
///
/// # Errors
///
/// Returns [`RulesError::NoMovesAvailable`] when the board is full.
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    player: Player,
    rng: &mut R,
) -> Result<Position, RulesError> {
    select_move_with_tier(board, player, rng).map(|choice| choice.position)
}

/// Like [`select_move`], also reporting which tier produced the move.
#[instrument(skip(board, rng))]
pub fn select_move_with_tier<R: Rng + ?Sized>(
    board: &Board,
    player: Player,
    rng: &mut R,
) -> Result<MoveChoice, RulesError> {
    let empty = board.empty_positions();
    if empty.is_empty() {
        warn!("Move requested on a full board");
        return Err(RulesError::NoMovesAvailable);
    }

    let choice = if let Some(position) = completing_square(board, player, &empty) {
        MoveChoice { position, tier: Tier::WinNow }
    } else if let Some(position) = completing_square(board, player.opponent(), &empty) {
        MoveChoice { position, tier: Tier::Block }
    } else if board.is_empty(Position::CENTER) {
        MoveChoice { position: Position::CENTER, tier: Tier::Center }
    } else {
        let corners: Vec<Position> = Position::CORNERS
            .into_iter()
            .filter(|pos| board.is_empty(*pos))
            .collect();

        match pick(&corners, rng) {
            Some(position) => MoveChoice { position, tier: Tier::Corner },
            None => MoveChoice {
                position: pick(&empty, rng).ok_or(RulesError::NoMovesAvailable)?,
                tier: Tier::Any,
            },
        }
    };

    debug!(position = %choice.position, tier = %choice.tier, "Selected move");
    Ok(choice)
}

/// First empty square where `player` would complete a line.
fn completing_square(board: &Board, player: Player, empty: &[Position]) -> Option<Position> {
    empty
        .iter()
        .copied()
        .find(|&pos| board.with_trial(pos, player).has_line(player.into(), pos))
}

fn pick<R: Rng + ?Sized>(candidates: &[Position], rng: &mut R) -> Option<Position> {
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.gen_range(0..candidates.len())])
}
