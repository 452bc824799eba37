use crate::square::Square;
use crate::types::*;

/// The 8×8 grid, one optional piece per square, indexed `rank * 8 + file`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    pub fn startpos() -> Self {
        let mut b = Board::empty();

        for file in 0..8 {
            b.squares[8 + file] = Some(Piece::new(Color::White, PieceKind::Pawn));
            b.squares[48 + file] = Some(Piece::new(Color::Black, PieceKind::Pawn));
        }
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, &kind) in back.iter().enumerate() {
            b.squares[file] = Some(Piece::new(Color::White, kind));
            b.squares[56 + file] = Some(Piece::new(Color::Black, kind));
        }
        b
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    #[inline]
    pub fn piece_at_mut(&mut self, sq: Square) -> Option<&mut Piece> {
        self.squares[sq.index()].as_mut()
    }

    #[inline]
    pub fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        self.squares[sq.index()] = pc;
    }

    /// Remove and return whatever stands on `sq`.
    #[inline]
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].take()
    }

    #[inline]
    pub fn is_empty_at(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    pub fn king_square(&self, c: Color) -> Option<Square> {
        self.pieces(c)
            .find(|(_, pc)| pc.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Pieces of colour `c` with their squares, in row-major (a8 first) order.
    pub fn pieces(&self, c: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::row_major().filter_map(move |sq| match self.piece_at(sq) {
            Some(pc) if pc.color == c => Some((sq, pc)),
            _ => None,
        })
    }

    pub fn count(&self, c: Color, kind: PieceKind) -> usize {
        self.pieces(c).filter(|(_, pc)| pc.kind == kind).count()
    }

    /// True when every square strictly between `from` and `to` is empty.
    ///
    /// Walks one step at a time along the line joining the two squares, so
    /// it is only meaningful for squares on a common rank, file or diagonal.
    pub fn path_clear(&self, from: Square, to: Square) -> bool {
        let (dr, df) = from.delta_to(to);
        let (step_r, step_f) = (dr.signum(), df.signum());
        let mut cur = from.offset(step_r, step_f);
        while let Some(sq) = cur {
            if sq == to {
                return true;
            }
            if !self.is_empty_at(sq) {
                return false;
            }
            cur = sq.offset(step_r, step_f);
        }
        true
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
