use super::*;
use greedy_engine::GreedyEngine;

#[test]
fn test_self_play_respects_ply_cap() {
    let mut white = GreedyEngine::new();
    let mut black = GreedyEngine::new();

    let outcome = run_selfplay(&mut white, &mut black, GameState::startpos(), 10).unwrap();

    assert_eq!(outcome.plies, 10);
    assert_eq!(outcome.log.len(), 10);
    assert_eq!(outcome.log[0].notation, "pawn-a2-a4");
    assert_eq!(outcome.log[1].color, Color::Black);
    assert!(!outcome.status.is_over());
}

#[test]
fn test_self_play_stops_at_mate() {
    let mut white = GreedyEngine::new();
    let mut black = GreedyEngine::new();
    // black is already mated
    let start = GameState::from_fen("3R2k1/5ppp/8/8/8/8/8/6K1 b - - 1 1").unwrap();

    let outcome = run_selfplay(&mut white, &mut black, start, 50).unwrap();

    assert_eq!(outcome.plies, 0);
    assert_eq!(outcome.status, GameStatus::Checkmate { loser: Color::Black });
}

#[test]
fn test_self_play_finds_mate_in_one_by_capture() {
    let mut white = GreedyEngine::new();
    let mut black = GreedyEngine::new();
    // the only capture also mates
    let start = GameState::from_fen("q5k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").unwrap();

    let outcome = run_selfplay(&mut white, &mut black, start, 5).unwrap();

    assert_eq!(outcome.log[0].notation, "rook-a1-a8");
    assert_eq!(outcome.status, GameStatus::Checkmate { loser: Color::Black });
    assert_eq!(outcome.plies, 1);
}

#[test]
fn test_ply_cap_reports_in_progress_even_in_check() {
    let mut white = GreedyEngine::new();
    let mut black = GreedyEngine::new();
    let start = GameState::from_fen("4k3/8/8/8/8/8/8/4RK2 b - - 0 1").unwrap();

    let outcome = run_selfplay(&mut white, &mut black, start, 0).unwrap();

    assert_eq!(outcome.plies, 0);
    assert_eq!(outcome.status, GameStatus::InProgress);
}
