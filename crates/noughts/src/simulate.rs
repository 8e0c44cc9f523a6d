//! Computer-versus-computer games.

use noughts_rules::{Game, GameOutcome, RulesError, select_move};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Results of a batch of self-play games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    /// Games played.
    pub games: u32,
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Tally {
    fn record(&mut self, outcome: GameOutcome) {
        self.games += 1;
        match outcome {
            GameOutcome::XWins => self.x_wins += 1,
            GameOutcome::OWins => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::InProgress => {}
        }
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games: X won {}, O won {}, {} drawn",
            self.games, self.x_wins, self.o_wins, self.draws
        )
    }
}

/// Plays `games` games with the heuristic on both sides.
#[instrument]
pub fn simulate(games: u32, seed: u64) -> Result<Tally, RulesError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = Game::new();
    let mut tally = Tally::default();

    for round in 0..games {
        game.reset();
        while !game.is_over() {
            let position = select_move(game.board(), game.to_move(), &mut rng)?;
            game.place(position)?;
        }
        debug!(round, outcome = %game.outcome(), "Self-play game finished");
        tally.record(game.outcome());
    }

    info!(%tally, "Simulation complete");
    Ok(tally)
}
