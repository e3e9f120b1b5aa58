//! Tests for the terminal detector across every board.

use perfect_tictactoe::{
    Board, GameStatus, LINES, Outcome, Player, Position, Square, is_draw, status, winner,
};

/// All 3^9 fillings of the grid, reachable or not.
fn all_boards() -> impl Iterator<Item = Board> {
    (0..3usize.pow(9)).map(|mut code| {
        let mut board = Board::new();
        for pos in Position::ALL {
            let square = match code % 3 {
                0 => Square::Empty,
                1 => Square::Occupied(Player::Human),
                _ => Square::Occupied(Player::Computer),
            };
            board.set(pos, square);
            code /= 3;
        }
        board
    })
}

#[test]
fn test_exactly_one_classification() {
    for board in all_boards() {
        let win = winner(&board);
        let full = is_draw(&board);

        let human_wins = win == Some(Player::Human);
        let computer_wins = win == Some(Player::Computer);
        let draw = win.is_none() && full;
        let open = win.is_none() && !full;

        let held = [human_wins, computer_wins, draw, open]
            .iter()
            .filter(|b| **b)
            .count();
        assert_eq!(held, 1, "{board:?}");

        let expected = match (human_wins, computer_wins, draw) {
            (true, _, _) => GameStatus::Won(Player::Human),
            (_, true, _) => GameStatus::Won(Player::Computer),
            (_, _, true) => GameStatus::Draw,
            _ => GameStatus::InProgress,
        };
        assert_eq!(status(&board), expected);
        assert_eq!(Outcome::of_terminal(&board).is_some(), status(&board).is_over());
    }
}

#[test]
fn test_detection_is_pure() {
    for board in all_boards().step_by(7) {
        let before = board;
        let first = (winner(&board), is_draw(&board));
        let second = (winner(&board), is_draw(&board));
        assert_eq!(first, second);
        assert_eq!(board, before);
    }
}

#[test]
fn test_winner_requires_a_full_line() {
    for board in all_boards() {
        let owns_line = |player: Player| {
            LINES.iter().any(|line| {
                line.iter()
                    .all(|pos| board.get(*pos) == Square::Occupied(player))
            })
        };
        match winner(&board) {
            Some(player) => assert!(owns_line(player), "{board:?}"),
            None => {
                assert!(!owns_line(Player::Human) && !owns_line(Player::Computer));
            }
        }
    }
}

#[test]
fn test_human_line_beats_computer_line() {
    let board: Board = "OOO/XXX/...".parse().unwrap();
    assert_eq!(winner(&board), Some(Player::Human));
    assert_eq!(status(&board), GameStatus::Won(Player::Human));

    for board in all_boards() {
        let human_line = LINES.iter().any(|line| {
            line.iter()
                .all(|pos| board.get(*pos) == Square::Occupied(Player::Human))
        });
        if human_line {
            assert_eq!(winner(&board), Some(Player::Human), "{board:?}");
        }
    }
}
