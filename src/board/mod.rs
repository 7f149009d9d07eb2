//! Board representation.
//!
//! The 4×4 board is encoded as a fixed-length [`Chromosome`] of 16 cells in
//! row-major order: cell `i` sits at row `i / 4`, column `i % 4`.
//!
//! # Key Types
//!
//! - [`Piece`]: Queen, Rook, Bishop, Knight and their attack rules
//! - [`Chromosome`]: The 16-cell encoding, with parsing, display, and repair
//! - [`PieceCounts`]: Per-piece target counts that a valid chromosome matches

mod chromosome;
mod piece;

pub use chromosome::{Chromosome, PieceCounts};
pub use piece::Piece;

/// Number of rows (and columns) on the board.
pub const SIDE: usize = 4;

/// Number of cells on the board, and the length of every chromosome.
pub const CELLS: usize = SIDE * SIDE;

/// Row of cell `index`.
#[inline]
pub fn row_of(index: usize) -> usize {
    index / SIDE
}

/// Column of cell `index`.
#[inline]
pub fn col_of(index: usize) -> usize {
    index % SIDE
}
