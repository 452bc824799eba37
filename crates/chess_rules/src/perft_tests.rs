use super::*;

#[test]
fn test_perft_startpos_shallow() {
    let st = GameState::startpos();
    assert_eq!(perft(&st, 0), 1);
    assert_eq!(perft(&st, 1), 20);
    assert_eq!(perft(&st, 2), 400);
}

#[test]
fn test_perft_stalemate_is_empty() {
    let st = GameState::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
    assert_eq!(perft(&st, 1), 0);
    assert_eq!(perft(&st, 3), 0);
}
