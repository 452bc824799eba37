use super::*;

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn lone(s: &str, color: Color, kind: PieceKind) -> (Board, Square, Piece) {
    let mut board = Board::empty();
    let pc = Piece::new(color, kind);
    board.set_piece(sq(s), Some(pc));
    (board, sq(s), pc)
}

#[test]
fn test_knight_attacks() {
    // Knight on e4 should attack 8 squares
    let (board, from, pc) = lone("e4", Color::White, PieceKind::Knight);
    assert_eq!(piece_attacks(&board, from, pc).len(), 8);

    // Knight on a1 should attack 2 squares
    let (board, from, pc) = lone("a1", Color::White, PieceKind::Knight);
    let attacks = piece_attacks(&board, from, pc);
    assert_eq!(attacks.len(), 2);
    assert!(attacks.contains(sq("c2")));
    assert!(attacks.contains(sq("b3")));
}

#[test]
fn test_king_attacks() {
    let (board, from, pc) = lone("e4", Color::Black, PieceKind::King);
    assert_eq!(piece_attacks(&board, from, pc).len(), 8);

    let (board, from, pc) = lone("a1", Color::Black, PieceKind::King);
    assert_eq!(piece_attacks(&board, from, pc).len(), 3);
}

#[test]
fn test_pawn_attacks_ignore_occupancy() {
    // White pawn on e4 threatens d5 and f5 even though both are empty
    let (board, from, pc) = lone("e4", Color::White, PieceKind::Pawn);
    let attacks = piece_attacks(&board, from, pc);
    assert_eq!(attacks.len(), 2);
    assert!(attacks.contains(sq("d5")));
    assert!(attacks.contains(sq("f5")));
    assert!(!attacks.contains(sq("e5")));

    // Black pawn on a7 threatens only b6
    let (board, from, pc) = lone("a7", Color::Black, PieceKind::Pawn);
    let attacks = piece_attacks(&board, from, pc);
    assert_eq!(attacks.squares().collect::<Vec<_>>(), vec![sq("b6")]);
}

#[test]
fn test_slider_attacks_empty_board() {
    let (board, from, pc) = lone("e4", Color::White, PieceKind::Rook);
    assert_eq!(piece_attacks(&board, from, pc).len(), 14);

    let (board, from, pc) = lone("e4", Color::White, PieceKind::Bishop);
    assert_eq!(piece_attacks(&board, from, pc).len(), 13);

    let (board, from, pc) = lone("e4", Color::White, PieceKind::Queen);
    assert_eq!(piece_attacks(&board, from, pc).len(), 27);
}

#[test]
fn test_rook_attacks_with_blockers() {
    let (mut board, from, pc) = lone("a1", Color::White, PieceKind::Rook);
    board.set_piece(sq("a4"), Some(Piece::new(Color::Black, PieceKind::Pawn)));
    let attacks = piece_attacks(&board, from, pc);

    assert!(attacks.contains(sq("a2")));
    assert!(attacks.contains(sq("a3")));
    assert!(attacks.contains(sq("a4"))); // blocker itself is hit
    assert!(!attacks.contains(sq("a5")));
    assert!(attacks.contains(sq("b1")));
    assert!(attacks.contains(sq("h1")));
}

#[test]
fn test_attack_map_is_union_over_colour() {
    let board = Board::startpos();
    let white = attack_map(&board, Color::White);

    // every square on rank 3 is covered by a pawn
    for file in 0..8 {
        assert!(white.contains(Square::new(2, file).unwrap()));
    }
    assert!(!white.contains(sq("e4")));
    assert!(!white.contains(sq("e5")));
    // knights reach rank 3 only
    assert!(is_square_attacked(&board, sq("f3"), Color::White));
    assert!(!is_square_attacked(&board, sq("f3"), Color::Black));
    // defended own pieces count as attacked
    assert!(white.contains(sq("d2")));
}
