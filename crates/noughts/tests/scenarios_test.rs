//! Move selection in hand-picked positions.

use noughts::{
    Board, GameInProgress, GameResult, GameStatus, Minimax, MoveError, OnePly, Player, Position,
    Priority, Strategy, is_draw, is_terminal, utility, winner,
};

#[test]
fn test_empty_board_neutral_move() {
    let board = Board::initial();
    let decision = OnePly.decide(&board).unwrap();
    assert_eq!(decision.priority, Priority::Neutral);
    assert!(board.available_actions().contains(&decision.position));
}

#[test]
fn test_completes_own_line() {
    // X at (0,0),(0,1); O at (1,0),(1,1); X to move
    let board: Board = "XX./OO./...".parse().unwrap();
    assert_eq!(board.current_player(), Player::X);
    assert_eq!(OnePly.select(&board), Ok(Position::TOP_RIGHT));
}

#[test]
fn test_blocks_threat_on_middle_row() {
    // O threatens (1,2); X has no winning square
    let board: Board = "X../OO./..X".parse().unwrap();
    assert_eq!(board.current_player(), Player::X);
    assert_eq!(OnePly.select(&board), Ok(Position::MIDDLE_RIGHT));
}

#[test]
fn test_full_board_without_line() {
    let board: Board = "XOX/XOO/OXX".parse().unwrap();
    assert!(is_terminal(&board));
    assert_eq!(winner(&board), None);
    assert_eq!(utility(&board), 0);
    assert!(is_draw(&board));
    assert_eq!(OnePly.select(&board), Err(MoveError::NoLegalMove));
}

#[test]
fn test_winner_is_stable() {
    let board: Board = "OX./OX./..X".parse().unwrap();
    let first = winner(&board);
    let second = winner(&board);
    assert_eq!(first, second);
}

#[test]
fn test_one_ply_loses_to_fork() {
    // X plays corners; the one-ply heuristic lets X fork and lose.
    let result = GameInProgress::replay(&[Position::TOP_LEFT]).unwrap();
    let GameResult::InProgress(mut game) = result else {
        panic!("Expected in-progress game");
    };

    loop {
        let result = if game.to_move() == Player::X {
            game.engine_move(&Minimax).unwrap()
        } else {
            game.engine_move(&OnePly).unwrap()
        };
        match result {
            GameResult::InProgress(g) => game = g,
            GameResult::Finished(done) => {
                assert_eq!(done.status(), GameStatus::Won(Player::X));
                break;
            }
        }
    }
}

#[test]
fn test_perfect_play_is_draw() {
    let mut board = Board::initial();
    while !is_terminal(&board) {
        let choice = Minimax.select(&board).unwrap();
        board = board.apply_as_current_player(choice).unwrap();
    }
    assert!(is_draw(&board), "perfect play should draw:\n{board}");
}
