//! The 16-cell chromosome and per-piece targets.

use super::{Piece, CELLS, SIDE};
use crate::error::{BoardError, ConfigError, GaError};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Required number of each piece on the board.
///
/// # Examples
///
/// ```
/// use u_placement::board::{Piece, PieceCounts};
///
/// let targets = PieceCounts::new(4, 0, 0, 0);
/// assert_eq!(targets.get(Piece::Queen), 4);
/// assert_eq!(targets.total(), 4);
/// assert!(targets.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PieceCounts {
    pub queens: usize,
    pub rooks: usize,
    pub bishops: usize,
    pub knights: usize,
}

impl PieceCounts {
    /// Creates targets from per-piece counts.
    pub fn new(queens: usize, rooks: usize, bishops: usize, knights: usize) -> Self {
        Self {
            queens,
            rooks,
            bishops,
            knights,
        }
    }

    /// Count for `piece`.
    pub fn get(&self, piece: Piece) -> usize {
        match piece {
            Piece::Queen => self.queens,
            Piece::Rook => self.rooks,
            Piece::Bishop => self.bishops,
            Piece::Knight => self.knights,
        }
    }

    fn get_mut(&mut self, piece: Piece) -> &mut usize {
        match piece {
            Piece::Queen => &mut self.queens,
            Piece::Rook => &mut self.rooks,
            Piece::Bishop => &mut self.bishops,
            Piece::Knight => &mut self.knights,
        }
    }

    /// Total number of pieces.
    pub fn total(&self) -> usize {
        self.queens + self.rooks + self.bishops + self.knights
    }

    /// Checks that all pieces fit on the board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let total = self.total();
        if total > CELLS {
            return Err(ConfigError::TooManyPieces { total });
        }
        Ok(())
    }
}

/// A board encoded as 16 cells in row-major order. `None` is an empty cell.
///
/// The textual form lists the 16 cells as `Q`, `R`, `B`, `K` or `E`
/// (`.` is also accepted for empty); whitespace is ignored.
///
/// ```
/// use u_placement::board::{Chromosome, Piece};
///
/// let board: Chromosome = "QEEE EQEE EEQE EEEQ".parse().unwrap();
/// assert_eq!(board.get(5), Some(Piece::Queen));
/// assert_eq!(board.count(Piece::Queen), 4);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome {
    cells: [Option<Piece>; CELLS],
}

impl Chromosome {
    /// An all-empty board.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a chromosome from raw cells.
    pub fn from_cells(cells: [Option<Piece>; CELLS]) -> Self {
        Self { cells }
    }

    /// The raw cells.
    pub fn cells(&self) -> &[Option<Piece>; CELLS] {
        &self.cells
    }

    /// Mutable access to the raw cells.
    pub fn cells_mut(&mut self) -> &mut [Option<Piece>; CELLS] {
        &mut self.cells
    }

    /// Content of cell `index`.
    ///
    /// # Panics
    /// Panics if `index >= 16`.
    pub fn get(&self, index: usize) -> Option<Piece> {
        self.cells[index]
    }

    /// Sets cell `index`.
    ///
    /// # Panics
    /// Panics if `index >= 16`.
    pub fn set(&mut self, index: usize, cell: Option<Piece>) {
        self.cells[index] = cell;
    }

    /// Number of cells holding `piece`.
    pub fn count(&self, piece: Piece) -> usize {
        self.cells.iter().filter(|&&c| c == Some(piece)).count()
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Current count of every piece.
    pub fn piece_counts(&self) -> PieceCounts {
        let mut counts = PieceCounts::default();
        for piece in self.cells.iter().flatten() {
            *counts.get_mut(*piece) += 1;
        }
        counts
    }

    /// Iterates over occupied cells as `(index, piece)`.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.map(|p| (i, p)))
    }

    /// Randomly permutes the cells (Fisher–Yates).
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cells.shuffle(rng);
    }

    /// Restores the piece counts to `targets`.
    ///
    /// Surplus pieces of every kind are removed first, then missing pieces
    /// are dropped on random empty cells, both in [`Piece::ALL`] order. Once
    /// the surplus is gone the board has room for every missing piece
    /// whenever `targets` fits on the board. Positions are drawn by
    /// rejection sampling; each individual placement or removal gets at
    /// most `max_attempts` draws.
    ///
    /// # Errors
    /// Returns [`GaError::RepairExhausted`] if a piece still has to be placed
    /// but no empty cell remains (only possible when `targets` exceeds 16
    /// pieces), or if a placement/removal exceeds `max_attempts` draws.
    pub fn repair<R: Rng>(
        &mut self,
        targets: &PieceCounts,
        max_attempts: usize,
        rng: &mut R,
    ) -> Result<(), GaError> {
        let counts = self.piece_counts();

        for piece in Piece::ALL {
            for _ in 0..counts.get(piece).saturating_sub(targets.get(piece)) {
                self.redraw(Some(piece), None, piece, max_attempts, rng)?;
            }
        }

        for piece in Piece::ALL {
            for _ in 0..targets.get(piece).saturating_sub(counts.get(piece)) {
                if self.empty_count() == 0 {
                    return Err(GaError::RepairExhausted { piece, attempts: 0 });
                }
                self.redraw(None, Some(piece), piece, max_attempts, rng)?;
            }
        }
        Ok(())
    }

    /// Draws random cells until one holds `from`, then overwrites it with `to`.
    fn redraw<R: Rng>(
        &mut self,
        from: Option<Piece>,
        to: Option<Piece>,
        piece: Piece,
        max_attempts: usize,
        rng: &mut R,
    ) -> Result<(), GaError> {
        for _ in 0..max_attempts {
            let pos = rng.random_range(0..CELLS);
            if self.cells[pos] == from {
                self.cells[pos] = to;
                return Ok(());
            }
        }
        Err(GaError::RepairExhausted {
            piece,
            attempts: max_attempts,
        })
    }
}

impl FromStr for Chromosome {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if symbols.len() != CELLS {
            return Err(BoardError::InvalidLength(symbols.len()));
        }

        let mut cells = [None; CELLS];
        for (cell, &c) in cells.iter_mut().zip(&symbols) {
            *cell = match c {
                'E' | 'e' | '.' => None,
                other => Some(Piece::from_symbol(other).ok_or(BoardError::InvalidSymbol(other))?),
            };
        }
        Ok(Self { cells })
    }
}

impl fmt::Display for Chromosome {
    /// Prints the board as four lines of four symbols.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(SIDE).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell.map_or('E', Piece::symbol))?;
            }
        }
        Ok(())
    }
}
