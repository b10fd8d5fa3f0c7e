use connect_four::game::{Board, Cell, GameOutcome, GameSession, Phase, Token, COLS, ROWS};

/// Opens with four drops in column 3 and fills the board without anyone
/// lining up four.
const DRAW_GAME: [usize; 42] = [
    3, 3, 3, 3, 1, 0, 0, 4, 0, 0, 1, 0, 2, 0, 3, 1, 1, 1, 1, 2, 2, 2, 4, 2, 2, 3, 5, 5, 4, 5, 4,
    4, 5, 5, 4, 5, 6, 6, 6, 6, 6, 6,
];

/// The 42nd move fills the board and completes four in the top row.
const LAST_MOVE_WINS: [usize; 42] = [
    0, 0, 0, 0, 1, 0, 2, 0, 2, 1, 1, 1, 4, 1, 1, 2, 2, 3, 2, 4, 3, 4, 3, 4, 3, 3, 4, 3, 5, 4, 6,
    5, 5, 6, 5, 5, 6, 5, 6, 6, 2, 6,
];

fn start(name1: &str, name2: &str) -> GameSession {
    let mut session = GameSession::new();
    assert!(session.start_game(name1, name2));
    session
}

#[test]
fn full_board_without_a_line_is_a_draw() {
    let mut session = start("Ann", "Bo");

    for (i, &col) in DRAW_GAME.iter().enumerate() {
        let report = session.play_move(col);
        assert!(report.accepted, "move {i} into column {col} was rejected");
        if i + 1 < DRAW_GAME.len() {
            assert_eq!(report.outcome, None, "game ended early at move {i}");
        }
    }

    assert!(session.board().is_full());
    assert_eq!(session.phase(), Phase::Finished(GameOutcome::Draw));
    assert_eq!(session.winner_name(), None);
}

#[test]
fn opening_column_alternates_tokens() {
    let mut session = start("Ann", "Bo");
    for &col in &DRAW_GAME[..4] {
        session.play_move(col);
    }
    assert_eq!(session.cell_at(5, 3), Cell::PlayerA);
    assert_eq!(session.cell_at(4, 3), Cell::PlayerB);
    assert_eq!(session.cell_at(3, 3), Cell::PlayerA);
    assert_eq!(session.cell_at(2, 3), Cell::PlayerB);
    assert_eq!(session.phase(), Phase::Playing);
}

#[test]
fn board_filling_win_is_not_a_draw() {
    let mut session = start("Ann", "Bo");

    for &col in &LAST_MOVE_WINS[..41] {
        assert_eq!(session.play_move(col).outcome, None);
    }
    let report = session.play_move(LAST_MOVE_WINS[41]);

    assert!(session.board().is_full());
    assert_eq!(report.placed_at, Some((0, 6)));
    assert_eq!(report.outcome, Some(GameOutcome::Winner(Token::PlayerB)));
    assert_eq!(session.winner_name(), Some("Bo"));
}

#[test]
fn horizontal_four_wins_on_fourth_piece_only() {
    let mut session = start("Ann", "Bo");

    // Ann builds along the bottom row; Bo answers in column 6
    for col in 0..3 {
        assert_eq!(session.play_move(col).outcome, None);
        assert_eq!(session.phase(), Phase::Playing);
        session.play_move(6);
    }
    let report = session.play_move(3);

    assert_eq!(report.placed_at, Some((ROWS - 1, 3)));
    assert_eq!(session.phase(), Phase::Finished(GameOutcome::Winner(Token::PlayerA)));
}

#[test]
fn diagonal_win_through_session() {
    let mut session = start("", "");
    // Builds a / diagonal for PlayerA from (5,0) to (2,3)
    let moves = [0, 1, 1, 2, 2, 3, 2, 3, 3, 6, 3];
    for &col in &moves[..moves.len() - 1] {
        assert_eq!(session.play_move(col).outcome, None);
    }
    let report = session.play_move(moves[moves.len() - 1]);

    assert_eq!(report.placed_at, Some((2, 3)));
    assert_eq!(report.outcome, Some(GameOutcome::Winner(Token::PlayerA)));
    assert_eq!(session.winner_name(), Some("Player 1"));
}

#[test]
fn restart_after_draw_keeps_players() {
    let mut session = start("Ann", "Bo");
    for &col in &DRAW_GAME {
        session.play_move(col);
    }

    session.restart();

    assert_eq!(session.phase(), Phase::Playing);
    assert_eq!(*session.board(), Board::new());
    assert_eq!(session.current_turn(), Token::PlayerA);
    assert_eq!(session.current_player_name(), Some("Ann"));
    assert_eq!(session.player_name(Token::PlayerB), Some("Bo"));
}

#[test]
fn full_reset_from_every_phase() {
    let mut setup = GameSession::new();
    setup.full_reset();
    assert_eq!(setup.phase(), Phase::Setup);

    let mut playing = start("Ann", "Bo");
    playing.play_move(0);
    playing.full_reset();
    assert_eq!(playing.phase(), Phase::Setup);
    assert_eq!(playing.current_player_name(), None);

    let mut finished = start("Ann", "Bo");
    for &col in &DRAW_GAME {
        finished.play_move(col);
    }
    finished.full_reset();
    assert_eq!(finished.phase(), Phase::Setup);
    assert_eq!(finished.player_name(Token::PlayerA), None);
    assert_eq!(finished.player_name(Token::PlayerB), None);
    assert!((0..COLS).all(|col| finished.cell_at(ROWS - 1, col) == Cell::Empty));
}
