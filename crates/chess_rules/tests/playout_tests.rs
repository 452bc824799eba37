//! Random playouts checking the bookkeeping invariants over many reachable
//! positions.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use chess_rules::{Color, GameState, PieceKind, Session};

const GAMES: u64 = 12;
const MAX_PLIES: usize = 120;

fn assert_one_king_each(state: &GameState) {
    for c in [Color::White, Color::Black] {
        assert_eq!(state.board.count(c, PieceKind::King), 1, "{c} kings");
    }
}

#[test]
fn random_playouts_keep_invariants() {
    for seed in 0..GAMES {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut session = Session::new();

        for _ in 0..MAX_PLIES {
            let moves = session.legal_moves();
            if moves.is_empty() {
                assert!(session.status().is_over());
                break;
            }
            let before = session.current_state().clone();
            let pick = moves[rng.gen_range(0..moves.len())].mv();
            session.submit(pick).unwrap();
            let after = session.current_state();

            assert_eq!(after.side_to_move, before.side_to_move.other());
            let expected_full = before.fullmove_number
                + u32::from(before.side_to_move == Color::Black);
            assert_eq!(after.fullmove_number, expected_full);
            assert_eq!(after.turn_count, before.turn_count + 1);

            let double_step = pick.kind == PieceKind::Pawn
                && pick.from.rank().abs_diff(pick.to.rank()) == 2;
            assert_eq!(after.en_passant_target.is_some(), double_step, "{pick}");

            let (old, new) = (before.castling_rights, after.castling_rights);
            assert!(!new.wk || old.wk);
            assert!(!new.wq || old.wq);
            assert!(!new.bk || old.bk);
            assert!(!new.bq || old.bq);

            assert_one_king_each(after);
        }

        // stepping back and forth must reproduce every snapshot exactly
        let snapshots = session.history().to_vec();
        while session.step_back() {}
        assert_eq!(session.current_state(), &snapshots[0]);
        for snap in &snapshots[1..] {
            assert!(session.step_forward());
            assert_eq!(session.current_state(), snap);
        }
        for depth in 1..snapshots.len() {
            session.go_to_latest();
            for _ in 0..depth {
                session.step_back();
            }
            let viewed = session.current_state().clone();
            session.step_back();
            session.step_forward();
            assert_eq!(session.current_state(), &viewed);
        }
    }
}

#[test]
fn random_playouts_round_trip_fen() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut session = Session::new();
    for _ in 0..80 {
        let moves = session.legal_moves();
        if moves.is_empty() {
            break;
        }
        session
            .submit(moves[rng.gen_range(0..moves.len())].mv())
            .unwrap();
        let fen = session.current_state().to_fen();
        let reparsed = GameState::from_fen(&fen).unwrap();
        assert_eq!(reparsed.to_fen(), fen);
        assert_eq!(reparsed.turn_count, session.current_state().turn_count);
    }
}
