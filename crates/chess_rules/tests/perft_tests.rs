use chess_rules::{perft, GameState};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const ROOK_ENDGAME: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

fn check(fen: &str, expected: &[(u8, u64)]) {
    let state = GameState::from_fen(fen).unwrap();
    for &(depth, nodes) in expected {
        assert_eq!(perft(&state, depth), nodes, "perft({depth}) of {fen}");
    }
}

#[test]
fn perft_startpos() {
    let state = GameState::startpos();
    assert_eq!(perft(&state, 1), 20);
    assert_eq!(perft(&state, 2), 400);
    assert_eq!(perft(&state, 3), 8902);
}

#[test]
fn perft_kiwipete() {
    // castling both ways, pins and en-passant opportunities
    check(KIWIPETE, &[(1, 48), (2, 2039)]);
}

#[test]
fn perft_rook_endgame() {
    // horizontal pins through an en-passant capture
    check(ROOK_ENDGAME, &[(1, 14), (2, 191), (3, 2812)]);
}
