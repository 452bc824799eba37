//! Board coordinates and sets of squares.
//!
//! A [`Square`] is a `(rank, file)` pair. Rank 0 is white's back rank
//! (algebraic rank `1`), file 0 is the `a` file. Every module of the crate
//! uses this one convention; the row-major display order (a8 first) is
//! produced by [`Square::row_major`] rather than by a second coordinate
//! system.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::ChessError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    rank: u8,
    file: u8,
}

impl Square {
    /// Build a square from signed coordinates, failing with
    /// [`ChessError::OutOfRangeSquare`] outside `[0,7]×[0,7]`.
    pub fn new(rank: i8, file: i8) -> Result<Square, ChessError> {
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Ok(Square {
                rank: rank as u8,
                file: file as u8,
            })
        } else {
            Err(ChessError::OutOfRangeSquare { rank, file })
        }
    }

    /// Square from a 0..63 index (`rank * 8 + file`).
    pub fn from_index(idx: usize) -> Result<Square, ChessError> {
        if idx < 64 {
            Ok(Square {
                rank: (idx / 8) as u8,
                file: (idx % 8) as u8,
            })
        } else {
            Err(ChessError::OutOfRangeSquare {
                rank: (idx / 8).min(i8::MAX as usize) as i8,
                file: (idx % 8) as i8,
            })
        }
    }

    #[inline]
    pub fn rank(self) -> u8 {
        self.rank
    }

    #[inline]
    pub fn file(self) -> u8 {
        self.file
    }

    #[inline]
    pub fn index(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    /// The square `d_rank` ranks and `d_file` files away, if still on the board.
    pub fn offset(self, d_rank: i8, d_file: i8) -> Option<Square> {
        Square::new(self.rank as i8 + d_rank, self.file as i8 + d_file).ok()
    }

    /// Signed `(Δrank, Δfile)` from `self` to `to`.
    pub fn delta_to(self, to: Square) -> (i8, i8) {
        (
            to.rank as i8 - self.rank as i8,
            to.file as i8 - self.file as i8,
        )
    }

    /// All 64 squares in board-export order: a8, b8, .. h8, a7, .. h1.
    ///
    /// This is the enumeration order used by the detector and the greedy
    /// heuristic, so it decides which of several equally scored moves wins.
    pub fn row_major() -> impl Iterator<Item = Square> {
        (0..8u8)
            .rev()
            .flat_map(|rank| (0..8u8).map(move |file| Square { rank, file }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, (b'1' + self.rank) as char)
    }
}

impl FromStr for Square {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let b = s.as_bytes();
        if b.len() != 2 {
            return Err(ChessError::MalformedMoveNotation(s.to_string()));
        }
        let f = b[0].to_ascii_lowercase();
        let r = b[1];
        if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
            return Err(ChessError::MalformedMoveNotation(s.to_string()));
        }
        Ok(Square {
            rank: r - b'1',
            file: f - b'a',
        })
    }
}

impl Serialize for Square {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A set of squares packed into one `u64`; bit `rank * 8 + file`.
///
/// Used for attack maps and renderer overlays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SquareSet(pub u64);

impl SquareSet {
    pub const EMPTY: SquareSet = SquareSet(0);

    #[inline]
    pub fn contains(self, sq: Square) -> bool {
        self.0 & (1u64 << sq.index()) != 0
    }

    #[inline]
    pub fn insert(&mut self, sq: Square) {
        self.0 |= 1u64 << sq.index();
    }

    #[inline]
    pub fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Squares in the set, a1 first.
    pub fn squares(self) -> SquareSetIter {
        SquareSetIter(self.0)
    }
}

impl BitOr for SquareSet {
    type Output = SquareSet;
    fn bitor(self, rhs: SquareSet) -> SquareSet {
        SquareSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for SquareSet {
    fn bitor_assign(&mut self, rhs: SquareSet) {
        self.0 |= rhs.0;
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut set = SquareSet::EMPTY;
        for sq in iter {
            set.insert(sq);
        }
        set
    }
}

pub struct SquareSetIter(u64);

impl Iterator for SquareSetIter {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let idx = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Square::from_index(idx).ok()
    }
}

#[cfg(test)]
#[path = "square_tests.rs"]
mod square_tests;
