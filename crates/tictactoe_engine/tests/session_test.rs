//! End-to-end tests for the board state machine.

use tictactoe_engine::{Engine, GameSession, GameStatus, MoveError, Outcome, Player, Position, Square};

fn play(engine: &mut Engine, moves: &[(usize, Player)]) {
    for &(index, player) in moves {
        engine
            .apply_move(index, player)
            .unwrap_or_else(|e| panic!("move {} by {} rejected: {}", index, player, e));
    }
}

#[test]
fn test_top_row_win() {
    let mut engine = Engine::new();
    play(
        &mut engine,
        &[(0, Player::X), (4, Player::O), (1, Player::X), (5, Player::O)],
    );
    let session = engine.apply_move(2, Player::X).unwrap();

    assert!(!session.is_running());
    match session.outcome() {
        Some(Outcome::Win { player, line }) => {
            assert_eq!(player, Player::X);
            assert_eq!(line.indices(), [0, 1, 2]);
        }
        other => panic!("expected X to win, got {:?}", other),
    }
}

#[test]
fn test_draw() {
    // X O X / X O O / O X X
    let mut engine = Engine::new();
    play(
        &mut engine,
        &[
            (0, Player::X),
            (1, Player::O),
            (2, Player::X),
            (4, Player::O),
            (3, Player::X),
            (5, Player::O),
            (7, Player::X),
            (6, Player::O),
        ],
    );
    assert!(engine.session().is_running());

    let session = engine.apply_move(8, Player::X).unwrap();
    assert!(!session.is_running());
    assert_eq!(session.outcome(), Some(Outcome::Draw));
    assert_eq!(session.status(), GameStatus::Draw);
    assert!(session.outcome().is_some_and(|o| o.is_draw() && o.winner().is_none()));
}

#[test]
fn test_win_on_last_square_is_not_a_draw() {
    // The ninth mark both fills the board and completes the left column.
    let mut engine = Engine::new();
    play(
        &mut engine,
        &[
            (0, Player::X),
            (1, Player::O),
            (3, Player::X),
            (4, Player::O),
            (2, Player::X),
            (5, Player::O),
            (7, Player::X),
            (8, Player::O),
        ],
    );
    let session = engine.apply_move(6, Player::X).unwrap();
    assert!(session.board().is_full());
    assert_eq!(session.outcome().and_then(|o| o.winner()), Some(Player::X));
}

#[test]
fn test_rejections_leave_session_unchanged() {
    let mut engine = Engine::new();
    play(&mut engine, &[(4, Player::X)]);
    let before = engine.session().clone();

    assert_eq!(engine.apply_move(4, Player::O), Err(MoveError::CellOccupied(Position::Center)));
    assert_eq!(engine.apply_move(9, Player::O), Err(MoveError::OutOfRange(9)));
    assert_eq!(engine.apply_move(usize::MAX, Player::O), Err(MoveError::OutOfRange(usize::MAX)));
    assert!(matches!(
        engine.apply_move(0, Player::X),
        Err(MoveError::WrongPlayer { .. })
    ));
    assert_eq!(engine.session(), &before);
}

#[test]
fn test_reset_mid_game() {
    let mut engine = Engine::new();
    play(&mut engine, &[(0, Player::X), (8, Player::O), (4, Player::X)]);

    let session = engine.reset();
    assert!(session.cells().iter().all(|s| *s == Square::Empty));
    assert_eq!(session.current_player(), Player::X);
    assert!(session.is_running());
    assert_eq!(session.outcome(), None);
}

#[test]
fn test_engines_are_independent() {
    let mut first = Engine::new();
    let second = Engine::new();
    play(&mut first, &[(0, Player::X)]);
    assert_eq!(second.session(), &GameSession::new());
}

#[test]
fn test_session_serializes() {
    let mut engine = Engine::new();
    play(&mut engine, &[(0, Player::X), (4, Player::O)]);

    let json = serde_json::to_string(engine.session()).unwrap();
    let restored: GameSession = serde_json::from_str(&json).unwrap();
    assert_eq!(&restored, engine.session());
}
