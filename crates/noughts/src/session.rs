//! A game session: one board, two named sides, and the computer's dice.

use crate::config::{GameMode, SessionConfig};
use derive_more::Display;
use noughts_rules::{Game, GameOutcome, Player, Position, RulesError, Tier, select_move_with_tier};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, instrument, warn};

/// Error returned when a session refuses a move.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SessionError {
    /// The rules engine rejected the move.
    #[display("{}", _0)]
    Rules(RulesError),

    /// A human tried to move while the computer holds the turn.
    #[display("Please wait, it's {}'s turn", _0)]
    NotYourTurn(String),
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Rules(err) => Some(err),
            SessionError::NotYourTurn(_) => None,
        }
    }
}

impl From<RulesError> for SessionError {
    fn from(err: RulesError) -> Self {
        SessionError::Rules(err)
    }
}

/// A move the computer made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct ComputerTurn {
    /// Side the computer played.
    pub player: Player,
    /// Square it took.
    pub position: Position,
    /// Heuristic tier that picked the square.
    pub tier: Tier,
    /// Outcome after the move.
    pub outcome: GameOutcome,
}

/// One game session.
///
/// Owns the game and the random source used by the computer. The
/// generation counter increases with every new game so that delayed
/// computer moves scheduled for an earlier game can be recognised and
/// dropped.
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    game: Game,
    rng: StdRng,
    generation: u64,
}

impl Session {
    /// Creates a session and starts its first game.
    #[instrument(skip(config), fields(mode = %config.mode()))]
    pub fn new(config: SessionConfig) -> Self {
        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_entropy(),
        };
        info!("Session started");
        Self {
            config,
            game: Game::new(),
            rng,
            generation: 0,
        }
    }

    /// Returns the session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Identifies the current game; bumped by [`Session::new_game`].
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Checks that a scheduled move still belongs to the current game.
    pub fn accepts(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// The side the computer plays, if it plays at all.
    pub fn computer_player(&self) -> Option<Player> {
        match self.config.mode() {
            GameMode::PlayerVsPlayer => None,
            GameMode::PlayerVsComputer => Some(*self.config.computer_mark()),
        }
    }

    /// True when the computer is due to move.
    pub fn is_computer_turn(&self) -> bool {
        !self.game.is_over() && self.computer_player() == Some(self.game.to_move())
    }

    /// Clears the board for a new game.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn new_game(&mut self) {
        self.game.reset();
        self.generation += 1;
        info!(generation = self.generation, "Started new game");
    }

    /// Plays a human move for the side to move.
    #[instrument(skip(self), fields(player = %self.game.to_move()))]
    pub fn human_move(&mut self, position: Position) -> Result<GameOutcome, SessionError> {
        if self.is_computer_turn() {
            let name = self.display_name(self.game.to_move()).to_string();
            warn!(%name, "Human move during computer turn");
            return Err(SessionError::NotYourTurn(name));
        }

        let outcome = self.game.place(position)?;
        debug!(%position, %outcome, "Human move applied");
        Ok(outcome)
    }

    /// Lets the heuristic play for the side to move.
    ///
    /// Does not check that the side belongs to the computer, so it can also
    /// be used for hints or self-play.
    #[instrument(skip(self), fields(player = %self.game.to_move()))]
    pub fn computer_move(&mut self) -> Result<ComputerTurn, SessionError> {
        if self.game.is_over() {
            return Err(RulesError::GameOver.into());
        }

        let player = self.game.to_move();
        let choice = select_move_with_tier(self.game.board(), player, &mut self.rng)?;
        let outcome = self.game.place(choice.position)?;
        info!(position = %choice.position, tier = %choice.tier, %outcome, "Computer moved");

        Ok(ComputerTurn::new(player, choice.position, choice.tier, outcome))
    }

    /// Name shown for a side under the current mode.
    pub fn display_name(&self, player: Player) -> &str {
        match self.computer_player() {
            None => match player {
                Player::X => self.config.player_one().as_str(),
                Player::O => self.config.player_two().as_str(),
            },
            Some(computer) if computer == player => self.config.computer_name().as_str(),
            Some(_) => self.config.user_name().as_str(),
        }
    }

    /// Status bar text for the current game.
    pub fn status_line(&self) -> String {
        match self.game.outcome() {
            GameOutcome::InProgress => {
                let player = self.game.to_move();
                format!("It's {}'s Turn ({})", self.display_name(player), player)
            }
            GameOutcome::Draw => "It's a Draw! Start a new game to play again.".to_string(),
            outcome => {
                let winner = outcome.winner().unwrap_or(self.game.to_move());
                format!(
                    "{} ({}) Won! Start a new game to play again.",
                    self.display_name(winner),
                    winner
                )
            }
        }
    }
}
