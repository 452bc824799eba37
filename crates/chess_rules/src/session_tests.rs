use super::*;

fn play_all(session: &mut Session, moves: &[&str]) {
    for m in moves {
        session.submit_move(m).unwrap();
    }
}

#[test]
fn test_new_session_at_start() {
    let session = Session::new();
    assert_eq!(session.current_state(), &GameState::startpos());
    assert_eq!(session.status(), GameStatus::InProgress);
    assert!(session.is_at_latest());
    assert!(session.move_log().is_empty());
    assert_eq!(session.legal_moves().len(), 20);
}

#[test]
fn test_accepted_move_is_logged() {
    let mut session = Session::new();
    play_all(&mut session, &["pawn-e2-e4", "pawn-d7-d5", "pawn-e4-d5"]);

    assert_eq!(session.history().len(), 4);
    assert_eq!(session.cursor(), 3);
    let log = session.move_log();
    assert_eq!(log.len(), 3);
    assert_eq!(log[1].color, Color::Black);
    assert_eq!(log[1].fullmove_number, 1);
    assert_eq!(log[2].fullmove_number, 2);
    assert_eq!(log[2].captured, Some(PieceKind::Pawn));
    assert_eq!(log[0].notation, "pawn-e2-e4");
}

#[test]
fn test_notation_is_case_insensitive() {
    let mut session = Session::new();
    session.submit_move("  Pawn-E2-E4 ").unwrap();
    assert_eq!(session.move_log()[0].notation, "pawn-e2-e4");
}

#[test]
fn test_rejected_move_leaves_session_alone() {
    let mut session = Session::new();
    session.submit_move("pawn-e2-e4").unwrap();
    let before = session.current_state().clone();

    for bad in ["pawn-e7-e4", "bogus", "dragon-e7-e5", "pawn-e2-e4", "pawn-i7-i5"] {
        assert!(session.submit_move(bad).is_err(), "{bad}");
    }
    assert_eq!(session.current_state(), &before);
    assert_eq!(session.history().len(), 2);
    assert_eq!(session.move_log().len(), 1);

    assert!(matches!(
        session.submit_move("dragon-e7-e5"),
        Err(ChessError::UnknownPieceKind(_))
    ));
    assert!(matches!(
        session.submit_move("bogus"),
        Err(ChessError::MalformedMoveNotation(_))
    ));
}

#[test]
fn test_history_navigation() {
    let mut session = Session::new();
    play_all(&mut session, &["pawn-e2-e4", "pawn-e7-e5", "knight-g1-f3"]);
    let head = session.current_state().clone();

    assert!(session.step_back());
    assert!(session.step_back());
    assert_eq!(session.cursor(), 1);
    assert!(!session.is_at_latest());
    assert_eq!(session.current_state().side_to_move, Color::Black);
    assert_eq!(session.latest_state(), &head);

    assert!(session.step_forward());
    assert!(session.step_forward());
    assert!(!session.step_forward());
    assert_eq!(session.current_state(), &head);

    session.step_back();
    session.go_to_latest();
    assert!(session.is_at_latest());

    while session.step_back() {}
    assert_eq!(session.cursor(), 0);
    assert_eq!(session.current_state(), &GameState::startpos());
}

#[test]
fn test_no_moves_while_browsing() {
    let mut session = Session::new();
    play_all(&mut session, &["pawn-e2-e4", "pawn-e7-e5"]);
    session.step_back();

    assert_eq!(
        session.submit_move("knight-g1-f3"),
        Err(ChessError::NotAtLatestState {
            cursor: 1,
            latest: 2
        })
    );
    // browsing check comes before parsing
    assert!(matches!(
        session.submit_move("garbage"),
        Err(ChessError::NotAtLatestState { .. })
    ));
    assert_eq!(session.history().len(), 3);

    session.go_to_latest();
    session.submit_move("knight-g1-f3").unwrap();
}

#[test]
fn test_restart() {
    let fen = "4k3/8/8/8/8/8/8/4K2R w K - 0 1";
    let mut session = Session::from_fen(fen).unwrap();
    play_all(&mut session, &["rook-h1-h5", "king-e8-d7"]);
    session.restart();

    assert_eq!(session.current_state().to_fen(), fen);
    assert!(session.move_log().is_empty());
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_fools_mate_ends_game() {
    let mut session = Session::new();
    play_all(&mut session, &["pawn-f2-f3", "pawn-e7-e5", "pawn-g2-g4"]);
    let status = session.submit_move("queen-d8-h4").unwrap();

    assert_eq!(status, GameStatus::Checkmate { loser: Color::White });
    assert_eq!(session.status(), status);
    assert!(session.legal_moves().is_empty());
    assert!(session.submit_move("pawn-a2-a3").is_err());

    // each snapshot keeps its own classification
    session.step_back();
    assert_eq!(session.status(), GameStatus::InProgress);
}

#[test]
fn test_status_reports_check_and_mate() {
    let mut session = Session::new();
    play_all(&mut session, &["pawn-e2-e4", "pawn-f7-f5"]);
    let status = session.submit_move("queen-d1-h5").unwrap();
    assert_eq!(status, GameStatus::Check { color: Color::Black });

    let mut session = Session::new();
    play_all(&mut session, &["pawn-e2-e4", "pawn-f7-f6", "pawn-d2-d4"]);
    let status = session.submit_move("pawn-g7-g5").unwrap();
    assert_eq!(status, GameStatus::InProgress);
    let status = session.submit_move("queen-d1-h5").unwrap();
    assert_eq!(status, GameStatus::Checkmate { loser: Color::Black });
}

#[test]
fn test_from_fen_rejects_garbage() {
    assert!(matches!(
        Session::from_fen("not a fen"),
        Err(ChessError::InvalidFen { .. })
    ));
}
