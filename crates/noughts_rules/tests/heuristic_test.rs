//! Move heuristic priorities.

use noughts_rules::{
    Board, Line, Player, Position, Tier, select_move, select_move_with_tier,
};
use rand::{SeedableRng, rngs::StdRng};

fn pos(row: usize, col: usize) -> Position {
    Position::new(row, col).unwrap()
}

fn board_with(marks: &[(Position, Player)]) -> Board {
    let mut board = Board::new();
    for &(position, player) in marks {
        board.place(position, player).unwrap();
    }
    board
}

#[test]
fn test_takes_every_available_win() {
    let mut rng = StdRng::seed_from_u64(11);
    for player in [Player::X, Player::O] {
        for line in Line::ALL {
            let squares = line.positions();
            for missing in 0..3 {
                let marks: Vec<_> = (0..3)
                    .filter(|&i| i != missing)
                    .map(|i| (squares[i], player))
                    .collect();
                let board = board_with(&marks);
                let before = board;

                let choice = select_move_with_tier(&board, player, &mut rng).unwrap();

                assert_eq!(choice.position, squares[missing], "{line} for {player}");
                assert_eq!(choice.tier, Tier::WinNow);
                assert_eq!(board, before, "board must not change");
            }
        }
    }
}

#[test]
fn test_blocks_every_opponent_threat() {
    let mut rng = StdRng::seed_from_u64(12);
    for player in [Player::X, Player::O] {
        let opponent = player.opponent();
        for line in Line::ALL {
            let squares = line.positions();
            for missing in 0..3 {
                let elsewhere = Position::ALL
                    .into_iter()
                    .find(|p| !line.contains(*p))
                    .unwrap();
                let mut marks: Vec<_> = (0..3)
                    .filter(|&i| i != missing)
                    .map(|i| (squares[i], opponent))
                    .collect();
                marks.push((elsewhere, player));
                let board = board_with(&marks);

                let choice = select_move_with_tier(&board, player, &mut rng).unwrap();

                assert_eq!(choice.position, squares[missing], "{line} against {opponent}");
                assert_eq!(choice.tier, Tier::Block);
            }
        }
    }
}

#[test]
fn test_blocks_row_when_playing_o() {
    let board = board_with(&[(pos(0, 0), Player::X), (pos(0, 1), Player::X)]);
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(select_move(&board, Player::O, &mut rng), Ok(pos(0, 2)));
}

#[test]
fn test_first_move_is_center() {
    let mut rng = StdRng::seed_from_u64(5);
    let choice = select_move_with_tier(&Board::new(), Player::X, &mut rng).unwrap();
    assert_eq!(choice.position, Position::CENTER);
    assert_eq!(choice.tier, Tier::Center);
}

#[test]
fn test_corner_choice_reproducible_under_seed() {
    let board = board_with(&[(Position::CENTER, Player::X)]);
    let picks = |seed: u64| -> Vec<Position> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..10)
            .map(|_| select_move(&board, Player::O, &mut rng).unwrap())
            .collect()
    };

    assert_eq!(picks(42), picks(42));
    assert!(picks(42).iter().all(|p| p.is_corner()));
}

#[test]
fn test_corner_choice_skips_taken_corners() {
    let board = board_with(&[
        (Position::CENTER, Player::X),
        (pos(0, 0), Player::O),
        (pos(2, 2), Player::X),
    ]);
    // X threatens nothing new: main diagonal is blocked by O.
    for seed in 0..30 {
        let mut rng = StdRng::seed_from_u64(seed);
        let choice = select_move_with_tier(&board, Player::O, &mut rng).unwrap();
        assert_eq!(choice.tier, Tier::Corner);
        assert!(choice.position == pos(0, 2) || choice.position == pos(2, 0));
    }
}

#[test]
fn test_any_square_when_corners_and_center_taken() {
    // X . O
    // O X X
    // X . O
    let board = board_with(&[
        (pos(0, 0), Player::X),
        (pos(0, 2), Player::O),
        (pos(1, 0), Player::O),
        (pos(1, 1), Player::X),
        (pos(1, 2), Player::X),
        (pos(2, 0), Player::X),
        (pos(2, 2), Player::O),
    ]);
    let mut seen = Vec::new();
    for seed in 0..40 {
        let mut rng = StdRng::seed_from_u64(seed);
        let choice = select_move_with_tier(&board, Player::O, &mut rng).unwrap();
        assert_eq!(choice.tier, Tier::Any);
        assert!(choice.position == pos(0, 1) || choice.position == pos(2, 1));
        if !seen.contains(&choice.position) {
            seen.push(choice.position);
        }
    }
    assert_eq!(seen.len(), 2, "both free squares should come up across seeds");
}
