//! Scenario tests for the minimax search.

use minimax_tictactoe::{
    active_player, apply, choose_move, is_terminal, legal_actions, score, winner, Action, Board,
    Player,
};
use minimax_tictactoe::Cell::{Empty, Marked};
use minimax_tictactoe::Player::{O, X};

#[test]
fn test_immediate_win_detected() {
    let board = Board::from_rows([
        [Marked(X), Marked(X), Marked(X)],
        [Marked(O), Marked(O), Empty],
        [Empty, Empty, Empty],
    ]);
    assert_eq!(winner(&board), Some(X));
    assert!(is_terminal(&board));
    assert_eq!(choose_move(&board), None);
}

#[test]
fn test_forced_block() {
    // X threatens the top row; O must answer at (0, 2).
    let board = Board::from_rows([
        [Marked(X), Marked(X), Empty],
        [Marked(O), Empty, Empty],
        [Empty, Empty, Empty],
    ]);
    assert_eq!(active_player(&board), O);
    assert_eq!(choose_move(&board), Some(Action::new(0, 2)));
}

#[test]
fn test_full_draw_board() {
    let board = Board::from_rows([
        [Marked(X), Marked(O), Marked(X)],
        [Marked(O), Marked(X), Marked(X)],
        [Marked(O), Marked(X), Marked(O)],
    ]);
    assert_eq!(winner(&board), None);
    assert!(is_terminal(&board));
    assert_eq!(score(&board), 0);
}

#[test]
fn test_optimal_self_play_draws() {
    let mut board = Board::new();
    let mut plies = 0;
    while let Some(action) = choose_move(&board) {
        board = apply(&board, action).unwrap();
        plies += 1;
        assert!(plies <= 9, "game exceeded nine plies");
    }
    assert!(is_terminal(&board));
    assert_eq!(winner(&board), None);
    assert_eq!(score(&board), 0);
}

/// The naive opponent: first empty cell in row-major order.
fn first_available(board: &Board) -> Option<Action> {
    legal_actions(board).into_iter().next()
}

#[test]
fn test_minimax_never_loses_to_first_available() {
    let mut board = Board::new();
    while !is_terminal(&board) {
        let action = match active_player(&board) {
            Player::X => choose_move(&board),
            Player::O => first_available(&board),
        };
        board = apply(&board, action.unwrap()).unwrap();
    }
    assert_ne!(winner(&board), Some(Player::O));
    assert!(score(&board) >= 0);
}

#[test]
fn test_choose_move_is_deterministic() {
    let board = Board::from_rows([
        [Empty, Empty, Empty],
        [Empty, Marked(X), Empty],
        [Empty, Empty, Empty],
    ]);
    let first = choose_move(&board);
    assert_eq!(first, choose_move(&board));
    assert!(first.is_some());
}

#[test]
fn test_tie_break_keeps_row_major_first() {
    // Every O reply loses here; the search keeps the first action in
    // row-major order, which is also the block at (0, 2).
    let board = Board::from_rows([
        [Marked(X), Marked(X), Empty],
        [Marked(O), Empty, Empty],
        [Empty, Empty, Empty],
    ]);
    let legal = legal_actions(&board);
    assert_eq!(legal[0], Action::new(0, 2));
    assert_eq!(choose_move(&board), Some(Action::new(0, 2)));
}

#[test]
fn test_malformed_board_does_not_crash() {
    // Out of contract: three X marks and none for O. The search still
    // returns some non-crashing answer.
    let board = Board::from_rows([
        [Marked(X), Marked(X), Empty],
        [Empty, Marked(X), Empty],
        [Empty, Empty, Empty],
    ]);
    let _ = choose_move(&board);
    let _ = score(&board);
    assert!(!is_terminal(&board) || winner(&board).is_some());
}
