//! Tests for the game session: turns, terminal states and the computer mode.

use tictac_core::{
    Board, Cell, Game, GameStatus, InvalidMove, InvalidMoveReason, Mode, Move, Player,
};

fn play(game: &mut Game, moves: &[usize]) {
    for &index in moves {
        let player = game.mover().expect("game still active");
        game.apply_move(index, player).expect("valid move");
    }
}

#[test]
fn test_apply_move_returns_updated_board() {
    let mut game = Game::default();
    let board = game.apply_move(4, Player::X).unwrap();
    assert_eq!(board.get(4), Some(Cell::Occupied(Player::X)));
    assert_eq!(board.marked_count(), 1);
}

#[test]
fn test_occupied_cell_is_rejected_and_board_unchanged() {
    let mut game = Game::default();
    play(&mut game, &[4]);
    let before = game.clone();

    let err = game.apply_move(4, Player::O).unwrap_err();
    assert_eq!(err, InvalidMove::at(4, InvalidMoveReason::Occupied));
    assert!(err.to_string().contains("occupied"));
    assert_eq!(game, before);
}

#[test]
fn test_out_of_range_is_rejected() {
    let mut game = Game::default();
    let err = game.apply_move(9, Player::X).unwrap_err();
    assert_eq!(err.reason, InvalidMoveReason::OutOfRange);
    assert_eq!(game.board(), &Board::new());
}

#[test]
fn test_wrong_player_is_rejected() {
    let mut game = Game::default();
    let err = game.apply_move(0, Player::O).unwrap_err();
    assert_eq!(err.reason, InvalidMoveReason::OutOfTurn);
    assert!(game.history().is_empty());
}

#[test]
fn test_win_detection_ends_game() {
    let mut game = Game::default();
    // X takes the top row
    play(&mut game, &[0, 4, 1, 6, 2]);

    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert!(!game.is_active());
    assert_eq!(game.mover(), None);
    assert!(!game.is_selectable(8));

    let err = game.apply_move(8, Player::O).unwrap_err();
    assert_eq!(err.reason, InvalidMoveReason::GameOver);
}

#[test]
fn test_draw_detection() {
    let mut game = Game::default();
    // X O X / X O O / O X X
    play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert!(game.is_full());
    assert_eq!(game.status(), GameStatus::Draw);
}

#[test]
fn test_winning_ninth_move_is_a_win() {
    let mut game = Game::default();
    // X O X / O X O / O X X: the last X completes the main diagonal
    play(&mut game, &[0, 1, 2, 3, 4, 5, 7, 6, 8]);

    assert!(game.is_full());
    assert_eq!(game.status(), GameStatus::Won(Player::X));
}

#[test]
fn test_reset_is_idempotent() {
    let mut game = Game::new(Mode::HumanVsComputer);
    play(&mut game, &[4, 0, 8]);

    game.reset();
    let once = game.clone();
    game.reset();

    assert_eq!(game, once);
    assert_eq!(game, Game::new(Mode::HumanVsComputer));
    assert_eq!(game.status(), GameStatus::InProgress(Player::X));
}

#[test]
fn test_reset_leaves_terminal_state() {
    let mut game = Game::default();
    play(&mut game, &[0, 4, 1, 6, 2]);
    game.reset();
    assert!(game.is_active());
    assert!(game.is_selectable(0));
}

#[test]
fn test_computer_mode_waits_for_o() {
    let mut game = Game::new(Mode::HumanVsComputer);
    assert!(!game.computer_to_move());

    game.apply_move(4, Player::X).unwrap();
    assert!(game.computer_to_move());

    let index = game.request_computer_move().unwrap().expect("open cell");
    assert_eq!(game.board().get(index), Some(Cell::Occupied(Player::O)));
    assert_eq!(game.status(), GameStatus::InProgress(Player::X));
    assert!(!game.computer_to_move());
}

#[test]
fn test_human_mode_never_asks_computer() {
    let mut game = Game::default();
    game.apply_move(4, Player::X).unwrap();
    assert!(!game.computer_to_move());

    let status = game.play_turn(0).unwrap();
    assert_eq!(status, GameStatus::InProgress(Player::X));
    assert_eq!(game.history().len(), 2);
}

#[test]
fn test_play_turn_answers_immediately() {
    let mut game = Game::new(Mode::HumanVsComputer);
    let status = game.play_turn(4).unwrap();

    assert_eq!(status, GameStatus::InProgress(Player::X));
    assert_eq!(game.history()[0], Move::new(Player::X, 4));
    assert_eq!(game.history()[1].player, Player::O);
}

#[test]
fn test_computer_completes_its_line() {
    let mut game = Game::new(Mode::HumanVsComputer);
    // X . X / O O . / . X .  with O to move: only 5 wins
    play(&mut game, &[0, 3, 2, 4, 7]);

    assert_eq!(game.request_computer_move().unwrap(), Some(5));
    assert_eq!(game.status(), GameStatus::Won(Player::O));

    let err = game.request_computer_move().unwrap_err();
    assert_eq!(err.reason, InvalidMoveReason::GameOver);
    assert_eq!(err.index, None);
}

#[test]
fn test_games_are_independent() {
    let mut first = Game::default();
    let second = Game::default();
    first.apply_move(4, Player::X).unwrap();

    assert_eq!(second.board(), &Board::new());
    assert_eq!(first.board().marked_count(), 1);
}
