//! Tests for the connect-N game state machine.

use strictly_connect::{
    Coord, Game, GameState, HistoryError, Move, MoveError, MoveStatus, QuitStatus,
};

fn players(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

fn new_game(names: &[&str]) -> Game {
    Game::new("g".to_string(), 4, 4, 4, players(names))
}

/// Fills a 4x4 board without any run of four. Final layout, top row first:
///
/// ```text
/// b b a a
/// a a b b
/// b b a a
/// a a b b
/// ```
fn play_to_draw(game: &Game) {
    for _ in 0..2 {
        for j in 0..4 {
            let (a_col, b_col) = if j < 2 { (j, 2 + j) } else { (j, j - 2) };
            game.make_move("a", a_col).expect("a moves");
            game.make_move("b", b_col).expect("b moves");
        }
    }
}

#[test]
fn test_new_game_is_empty_and_in_progress() {
    let game = new_game(&["a", "b"]);

    assert_eq!(game.id(), "g");
    assert_eq!(game.win_length(), 4);
    assert_eq!((game.rows(), game.columns()), (4, 4));
    assert_eq!(game.players(), players(&["a", "b"]));
    assert_eq!(game.move_count(), 0);
    assert!(!game.is_over());
    assert_eq!(game.winner(), None);

    let status = game.status();
    assert_eq!(status.players, players(&["a", "b"]));
    assert_eq!(status.state, GameState::InProgress);
    assert_eq!(status.winner, None);
}

#[test]
fn test_move_validation_order() {
    let game = new_game(&["a", "b"]);

    let err = game.make_move("a", 4).unwrap_err();
    assert_eq!(err.status(), MoveStatus::BadRequest);

    let err = game.make_move("zzz", 0).unwrap_err();
    assert_eq!(err, MoveError::NotPlaying("zzz".to_string()));
    assert_eq!(err.status(), MoveStatus::WrongGame);

    // Column bounds are checked before membership.
    let err = game.make_move("zzz", 9).unwrap_err();
    assert_eq!(err.status(), MoveStatus::BadRequest);

    let err = game.make_move("b", 0).unwrap_err();
    assert_eq!(err.status(), MoveStatus::WrongTurn);

    assert_eq!(game.move_count(), 0);
}

#[test]
fn test_gravity_and_confirmation() {
    let game = new_game(&["a", "b"]);

    let confirmation = game.make_move("a", 1).expect("legal move");
    assert_eq!(confirmation.move_path, "g/moves/0");
    assert_eq!(
        game.get_move(0).expect("recorded"),
        Move::Drop {
            player: "a".to_string(),
            coord: Coord::new(3, 1),
        }
    );

    let confirmation = game.make_move("b", 1).expect("legal move");
    assert_eq!(confirmation.move_path, "g/moves/1");
    assert_eq!(game.get_move(1).expect("recorded").coord(), Some(Coord::new(2, 1)));
    assert_eq!(game.cell(Coord::new(3, 1)), Some("a".to_string()));
    assert_eq!(game.cell(Coord::new(2, 1)), Some("b".to_string()));
    assert_eq!(game.cell(Coord::new(1, 1)), None);
}

#[test]
fn test_full_column_rejected() {
    let game = Game::new("g".to_string(), 2, 3, 3, players(&["a", "b"]));
    game.make_move("a", 0).expect("legal");
    game.make_move("b", 0).expect("legal");

    let err = game.make_move("a", 0).unwrap_err();
    assert_eq!(err, MoveError::ColumnFull(0));
    assert_eq!(err.status(), MoveStatus::BadRequest);

    // Still a's turn after the rejected drop.
    game.make_move("a", 1).expect("legal");
    assert_eq!(game.move_count(), 3);
}

#[test]
fn test_vertical_win_end_to_end() {
    let game = new_game(&["a", "b"]);

    for round in 0..3 {
        game.make_move("a", 1).expect("a moves");
        game.make_move("b", 3).expect("b moves");
        assert!(!game.is_over(), "no win after round {}", round);
    }
    let confirmation = game.make_move("a", 1).expect("winning move is still confirmed");
    assert_eq!(confirmation.move_path, "g/moves/6");

    let status = game.status();
    assert_eq!(status.state, GameState::Done);
    assert_eq!(status.winner, Some("a".to_string()));

    // Nothing changes once the game is over.
    let err = game.make_move("b", 3).unwrap_err();
    assert_eq!(err, MoveError::GameOver);
    assert_eq!(err.status(), MoveStatus::BadRequest);
    assert_eq!(game.quit("b"), QuitStatus::GameOver);
    assert_eq!(game.move_count(), 7);
    assert_eq!(game.status().players, players(&["a", "b"]));
}

#[test]
fn test_draw_on_full_board() {
    let game = new_game(&["a", "b"]);
    play_to_draw(&game);

    assert!(game.is_over());
    assert_eq!(game.winner(), None);
    let status = game.status();
    assert_eq!(status.state, GameState::Done);
    assert_eq!(status.winner, None);
    assert_eq!(game.render(), "2 2 1 1\n1 1 2 2\n2 2 1 1\n1 1 2 2");
}

#[test]
fn test_quit_statuses_and_attrition() {
    let game = new_game(&["a", "b", "c"]);

    assert_eq!(game.quit("YYYYYY"), QuitStatus::InvalidGame);
    assert_eq!(game.quit("b"), QuitStatus::LeftGame);
    assert_eq!(game.quit("b"), QuitStatus::QuitLeftGame);
    assert!(!game.is_over());
    assert_eq!(game.status().players, players(&["a", "c"]));

    assert_eq!(game.quit("c"), QuitStatus::LeftGame);
    let status = game.status();
    assert_eq!(status.state, GameState::Done);
    assert_eq!(status.winner, Some("a".to_string()));
    assert_eq!(status.players, players(&["a"]));

    assert_eq!(game.quit("a"), QuitStatus::GameOver);
    assert_eq!(game.move_count(), 2);
}

#[test]
fn test_quit_player_cannot_move() {
    let game = new_game(&["a", "b", "c"]);
    assert_eq!(game.quit("a"), QuitStatus::LeftGame);

    let err = game.make_move("a", 0).unwrap_err();
    assert_eq!(err.status(), MoveStatus::WrongGame);

    // With no drops yet, the first active player opens.
    game.make_move("b", 0).expect("b opens");
}

#[test]
fn test_rotation_with_three_players() {
    let game = Game::new("g".to_string(), 6, 7, 4, players(&["a", "b", "c"]));
    let order = ["a", "b", "c", "a", "b", "c"];
    for (i, player) in order.iter().enumerate() {
        game.make_move(player, i % 7).expect("in turn");
    }
}

#[test]
fn test_rotation_shrinks_after_quit() {
    let game = Game::new("g".to_string(), 6, 7, 4, players(&["a", "b", "c"]));
    game.make_move("a", 0).expect("a moves");
    assert_eq!(game.quit("b"), QuitStatus::LeftGame);

    // b is gone, so c follows a, and a follows c.
    assert_eq!(
        game.make_move("a", 1).unwrap_err().status(),
        MoveStatus::WrongTurn
    );
    game.make_move("c", 1).expect("c follows a");
    game.make_move("a", 2).expect("a follows c");
    game.make_move("c", 3).expect("c follows a");
}

#[test]
fn test_rotation_continues_after_last_mover_quits() {
    let game = Game::new("g".to_string(), 6, 7, 4, players(&["a", "b", "c"]));
    game.make_move("a", 0).expect("a moves");
    game.make_move("b", 0).expect("b moves");
    assert_eq!(game.quit("b"), QuitStatus::LeftGame);

    game.make_move("c", 1).expect("c follows the departed b");
    game.make_move("a", 1).expect("a follows c");
}

#[test]
fn test_get_move_out_of_range() {
    let game = new_game(&["a", "b"]);
    game.make_move("a", 1).expect("legal");

    assert_eq!(
        game.get_move(1).unwrap_err(),
        HistoryError::IndexOutOfRange { index: 1, len: 1 }
    );
}

#[test]
fn test_get_moves_ranges() {
    let game = new_game(&["a", "b"]);
    game.make_move("a", 1).expect("legal");
    game.make_move("b", 2).expect("legal");
    game.make_move("a", 3).expect("legal");

    let columns = |start, until| -> Vec<usize> {
        game.get_moves(start, until)
            .expect("valid range")
            .iter()
            .filter_map(Move::column)
            .collect()
    };

    assert_eq!(columns(0, 1), vec![1, 2]);
    assert_eq!(columns(0, 0), vec![1]);
    assert_eq!(columns(0, 2), vec![1, 2, 3]);
    assert_eq!(columns(0, 3), vec![1, 2, 3]);
    assert_eq!(columns(0, 99), vec![1, 2, 3]);
    assert_eq!(columns(0, -1), vec![1, 2, 3]);
    assert_eq!(columns(1, 2), vec![2, 3]);
    assert_eq!(columns(1, 1), vec![2]);
    assert_eq!(columns(3, -1), Vec::<usize>::new());

    assert!(matches!(
        game.get_moves(5, -1),
        Err(HistoryError::RangeOutOfBounds { start: 5, end: 3 })
    ));
}

#[test]
fn test_quit_recorded_in_ledger() {
    let game = new_game(&["a", "b", "c"]);
    game.make_move("a", 2).expect("legal");
    game.quit("c");

    let moves = game.get_moves(0, -1).expect("valid range");
    assert_eq!(moves.len(), 2);
    assert_eq!(moves[1], Move::Quit { player: "c".to_string() });
    assert_eq!(moves[1].column(), None);
}

#[test]
fn test_win_length_one_ends_on_first_drop() {
    let game = Game::new("g".to_string(), 3, 3, 1, players(&["a", "b"]));
    game.make_move("a", 2).expect("legal");
    assert_eq!(game.winner(), Some("a".to_string()));
}

#[test]
fn test_diagonal_win() {
    // a plays a rising diagonal from the bottom-left corner.
    let game = new_game(&["a", "b"]);
    let script = [
        ("a", 0),
        ("b", 1),
        ("a", 1),
        ("b", 2),
        ("a", 2),
        ("b", 3),
        ("a", 2),
        ("b", 3),
        ("a", 3),
        ("b", 0),
    ];
    for (player, col) in script {
        game.make_move(player, col).expect("legal");
        assert!(!game.is_over());
    }

    game.make_move("a", 3).expect("winning move");
    assert_eq!(game.winner(), Some("a".to_string()));
}
