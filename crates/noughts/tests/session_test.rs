//! Session flow against the computer.

use noughts::{GameMode, MoveScheduler, Session, SessionConfig, SessionError, TurnEvent};
use noughts_rules::{GameOutcome, Player, Position, RulesError, Tier};
use std::time::Duration;
use tokio::sync::mpsc;

fn pos(row: usize, col: usize) -> Position {
    Position::new(row, col).unwrap()
}

fn vs_computer(seed: u64) -> SessionConfig {
    SessionConfig::default()
        .with_mode(GameMode::PlayerVsComputer)
        .with_seed(Some(seed))
}

#[test]
fn test_computer_blocks_row_threat() {
    let mut session = Session::new(vs_computer(8));

    session.human_move(pos(0, 0)).unwrap();
    let reply = session.computer_move().unwrap();
    assert_eq!(reply.position, Position::CENTER);
    assert_eq!(reply.tier, Tier::Center);

    session.human_move(pos(0, 1)).unwrap();
    let reply = session.computer_move().unwrap();
    assert_eq!(reply.player, Player::O);
    assert_eq!(reply.position, pos(0, 2));
    assert_eq!(reply.tier, Tier::Block);
    assert_eq!(reply.outcome, GameOutcome::InProgress);
}

#[test]
fn test_computer_opens_when_playing_x() {
    let config = vs_computer(1).with_computer_mark(Player::X);
    let mut session = Session::new(config);

    assert!(session.is_computer_turn());
    assert_eq!(session.status_line(), "It's Computer's Turn (X)");
    assert!(matches!(
        session.human_move(Position::CENTER),
        Err(SessionError::NotYourTurn(_))
    ));

    let opening = session.computer_move().unwrap();
    assert_eq!(opening.position, Position::CENTER);
    assert!(!session.is_computer_turn());
}

#[test]
fn test_game_runs_to_completion() {
    let mut session = Session::new(vs_computer(21));

    while !session.game().is_over() {
        if session.is_computer_turn() {
            session.computer_move().unwrap();
        } else {
            let square = session.game().board().empty_positions()[0];
            session.human_move(square).unwrap();
        }
    }

    let status = session.status_line();
    assert!(status.contains("Won!") || status.contains("Draw"), "{status}");
    assert_eq!(
        session.computer_move().unwrap_err(),
        SessionError::Rules(RulesError::GameOver)
    );

    session.new_game();
    assert!(!session.game().is_over());
    assert!(session.game().history().is_empty());
}

#[test]
fn test_winner_named_in_status() {
    let mut session = Session::new(SessionConfig::default().with_player_one("Ada".to_string()));
    for square in [pos(0, 0), pos(1, 0), pos(0, 1), pos(1, 1), pos(0, 2)] {
        session.human_move(square).unwrap();
    }
    assert_eq!(session.game().outcome(), GameOutcome::XWins);
    assert_eq!(session.status_line(), "Ada (X) Won! Start a new game to play again.");
}

#[test]
fn test_same_seed_same_replies() {
    let replies = |seed| {
        let mut session = Session::new(vs_computer(seed));
        session.human_move(Position::CENTER).unwrap();
        session.computer_move().unwrap().position
    };
    assert_eq!(replies(77), replies(77));
}

#[tokio::test(start_paused = true)]
async fn test_move_scheduled_before_new_game_is_stale() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut scheduler = MoveScheduler::new(tx);
    let mut session = Session::new(vs_computer(3));

    session.human_move(Position::CENTER).unwrap();
    scheduler.schedule(Duration::from_millis(800), session.generation());
    session.new_game();

    let Some(TurnEvent::ComputerMoveDue { generation }) = rx.recv().await else {
        panic!("scheduler should still report");
    };
    assert!(!session.accepts(generation));
}
