//! Chess pieces and their attack rules on the 4×4 board.
//!
//! Attacks ignore blocking: a queen on `(0, 0)` attacks `(3, 3)` even if
//! `(1, 1)` is occupied.

use super::{col_of, row_of};

/// A piece that can occupy a board cell.
///
/// An empty cell is represented as `None` in a [`Chromosome`](super::Chromosome).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Piece {
    /// Row, column, and diagonal attacks.
    Queen,
    /// Row and column attacks.
    Rook,
    /// Diagonal attacks.
    Bishop,
    /// (1, 2) / (2, 1) L-shaped attacks.
    Knight,
}

impl Piece {
    /// All pieces, in the order repair processes them.
    pub const ALL: [Piece; 4] = [Piece::Queen, Piece::Rook, Piece::Bishop, Piece::Knight];

    /// The single-letter symbol used in the textual board form.
    pub fn symbol(self) -> char {
        match self {
            Piece::Queen => 'Q',
            Piece::Rook => 'R',
            Piece::Bishop => 'B',
            Piece::Knight => 'K',
        }
    }

    /// Parses a piece symbol (case-insensitive). Returns `None` for anything
    /// that is not `Q`, `R`, `B` or `K`.
    pub fn from_symbol(c: char) -> Option<Piece> {
        match c.to_ascii_uppercase() {
            'Q' => Some(Piece::Queen),
            'R' => Some(Piece::Rook),
            'B' => Some(Piece::Bishop),
            'K' => Some(Piece::Knight),
            _ => None,
        }
    }

    /// Returns `true` if this piece, standing on cell `from`, attacks cell `to`.
    ///
    /// A piece never attacks its own cell.
    pub fn attacks(self, from: usize, to: usize) -> bool {
        if from == to {
            return false;
        }
        let dr = row_of(from).abs_diff(row_of(to));
        let dc = col_of(from).abs_diff(col_of(to));

        match self {
            Piece::Queen => dr == 0 || dc == 0 || dr == dc,
            Piece::Rook => dr == 0 || dc == 0,
            Piece::Bishop => dr == dc,
            Piece::Knight => (dr == 1 && dc == 2) || (dr == 2 && dc == 1),
        }
    }
}
