//! Line-based console front end.
//!
//! Reads commands from an async line source, prints the board and status
//! after every change, and drives the computer through [`MoveScheduler`].

use crate::scheduler::{MoveScheduler, TurnEvent};
use crate::session::Session;
use anyhow::{Context, Result};
use noughts_rules::{Position, RulesError};
use std::io::Write;
use std::str::FromStr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Help text listing accepted input.
pub const HELP: &str = "Enter 1-9 (keypad order) or row,col to play. \
'new' starts over, 'help' shows this, 'quit' exits.";

/// A line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play a square.
    Place(Position),
    /// Abandon the current game and start another.
    NewGame,
    /// Show the accepted input.
    Help,
    /// Leave the session.
    Quit,
}

impl FromStr for Command {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "new" | "n" | "restart" => Ok(Command::NewGame),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            other => other.parse().map(Command::Place),
        }
    }
}

/// Runs an interactive session until `quit` or end of input.
#[instrument(skip_all, fields(mode = %session.config().mode()))]
pub async fn run<R, W>(mut session: Session, input: R, mut out: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let mut scheduler = MoveScheduler::new(event_tx);
    let mut lines = input.lines();

    render(&session, &mut out)?;
    schedule_if_due(&session, &mut scheduler);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read input")? else {
                    debug!("Input closed");
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }

                let command = match line.parse::<Command>() {
                    Ok(command) => command,
                    Err(e) if session.game().is_over() => {
                        debug!(error = %e, "Unrecognised input after game end");
                        Command::NewGame
                    }
                    Err(e) => {
                        writeln!(out, "{e}. {HELP}")?;
                        continue;
                    }
                };

                match command {
                    Command::Quit => break,
                    Command::Help => {
                        writeln!(out, "{HELP}")?;
                        continue;
                    }
                    Command::NewGame => start_over(&mut session, &mut scheduler),
                    Command::Place(_) if session.game().is_over() => {
                        start_over(&mut session, &mut scheduler)
                    }
                    Command::Place(position) => {
                        if let Err(e) = session.human_move(position) {
                            warn!(error = %e, "Move rejected");
                            writeln!(out, "{e}")?;
                            continue;
                        }
                    }
                }

                render(&session, &mut out)?;
                schedule_if_due(&session, &mut scheduler);
            }
            Some(event) = event_rx.recv() => {
                let TurnEvent::ComputerMoveDue { generation } = event;
                if !session.accepts(generation) || !session.is_computer_turn() {
                    debug!(generation, current = session.generation(), "Dropping stale computer move");
                    continue;
                }

                let turn = session.computer_move().context("Computer failed to move")?;
                writeln!(
                    out,
                    "{} played {}",
                    session.display_name(turn.player),
                    turn.position
                )?;
                render(&session, &mut out)?;
                schedule_if_due(&session, &mut scheduler);
            }
        }
    }

    info!(games = session.generation() + 1, "Session ended");
    Ok(())
}

fn start_over(session: &mut Session, scheduler: &mut MoveScheduler) {
    scheduler.cancel();
    session.new_game();
}

fn schedule_if_due(session: &Session, scheduler: &mut MoveScheduler) {
    if session.is_computer_turn() && !scheduler.is_pending() {
        scheduler.schedule(session.config().move_delay(), session.generation());
    }
}

fn render<W: Write>(session: &Session, out: &mut W) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", session.game().board())?;
    writeln!(out)?;
    writeln!(out, "{}", session.status_line())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_parsing() {
        assert_eq!("NEW".parse::<Command>(), Ok(Command::NewGame));
        assert_eq!(" q ".parse::<Command>(), Ok(Command::Quit));
        assert_eq!("?".parse::<Command>(), Ok(Command::Help));
        assert_eq!("5".parse::<Command>(), Ok(Command::Place(Position::CENTER)));
        assert_eq!(
            "0,2".parse::<Command>(),
            Ok(Command::Place(Position::new(0, 2).unwrap()))
        );
        assert!("jump".parse::<Command>().is_err());
    }
}
