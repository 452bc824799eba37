use super::*;

const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

#[test]
fn test_startpos_matches_fen() {
    let parsed = GameState::from_fen(START_FEN).unwrap();
    assert_eq!(parsed, GameState::startpos());
    assert_eq!(GameState::startpos().to_fen(), START_FEN);
}

#[test]
fn test_fen_round_trip() {
    for fen in [
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3",
        "8/8/8/4k3/8/4K3/8/8 b - - 12 40",
    ] {
        assert_eq!(GameState::from_fen(fen).unwrap().to_fen(), fen);
    }
}

#[test]
fn test_turn_count_derived_from_fullmove() {
    let white = GameState::from_fen("8/8/8/4k3/8/4K3/8/8 w - - 0 1").unwrap();
    assert_eq!(white.turn_count, 1);
    let black = GameState::from_fen("8/8/8/4k3/8/4K3/8/8 b - - 0 3").unwrap();
    assert_eq!(black.turn_count, 6);
}

#[test]
fn test_moved_flags_follow_castling_rights() {
    let st = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1").unwrap();
    let flag = |s: &str| st.board.piece_at(sq(s)).unwrap().has_moved;

    assert!(!flag("e1"));
    assert!(!flag("h1"));
    assert!(flag("a1"), "white queenside right is gone");
    assert!(!flag("e8"));
    assert!(!flag("a8"));
    assert!(flag("h8"));
}

#[test]
fn test_en_passant_pawn_is_stamped() {
    let st =
        GameState::from_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3").unwrap();
    assert_eq!(st.en_passant_target, Some(sq("d6")));
    let pawn = st.board.piece_at(sq("d5")).unwrap();
    assert_eq!(pawn.last_double_step_turn, Some(st.turn_count - 1));
}

#[test]
fn test_invalid_fens() {
    for bad in [
        "",
        "8/8/8/8 w - -",
        "8/8/8/4k3/8/4K3/8/8 x - -",
        "8/8/8/4k3/8/4K3/8/9 w - -",
        "8/8/8/4k3/8/4K3/8/7X w - -",
        "8/8/8/8/8/4K3/8/8 w - -",
        "8/8/8/4k3/8/4K3/8/8 w - e6",
        "8/8/8/4k3/8/4K3/8/8 w Z -",
        // turn counter would overflow
        "4k3/8/8/8/8/8/8/4K3 w - - 0 4294967295",
        "4k3/8/8/8/8/8/8/4K3 b - - 0 2147483649",
        // ep target behind a pawn that never double-stepped
        "4k3/8/8/8/8/3p4/2P5/4K3 w - d4 0 1",
        // ep target on the right rank but occupied
        "4k3/8/3n4/3pP3/8/8/8/4K3 w - d6 0 1",
    ] {
        assert!(
            matches!(GameState::from_fen(bad), Err(ChessError::InvalidFen { .. })),
            "{bad:?} should be rejected"
        );
    }
}
