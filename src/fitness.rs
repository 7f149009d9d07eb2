//! Fitness evaluation.
//!
//! Fitness is `1 / (1 + threats + penalty)` where `threats` is the number
//! of distinct threatened cells and `penalty` the number of columns holding
//! more than one queen. Higher is better; `1.0` means no conflicts.

use crate::board::{col_of, Chromosome, Piece, CELLS, SIDE};

/// Marks every cell attacked by at least one other occupied cell.
///
/// Empty cells are never marked.
pub fn threatened_cells(chrom: &Chromosome) -> [bool; CELLS] {
    let mut threatened = [false; CELLS];
    for (from, piece) in chrom.occupied() {
        for (to, _) in chrom.occupied() {
            if piece.attacks(from, to) {
                threatened[to] = true;
            }
        }
    }
    threatened
}

/// Number of distinct occupied cells under attack.
///
/// Two pieces attacking each other count as two threatened cells; a cell
/// attacked by several pieces counts once.
pub fn threat_count(chrom: &Chromosome) -> usize {
    threatened_cells(chrom).iter().filter(|&&t| t).count()
}

/// Number of columns containing more than one queen.
pub fn column_penalty(chrom: &Chromosome) -> usize {
    let mut queens = [0usize; SIDE];
    for (i, piece) in chrom.occupied() {
        if piece == Piece::Queen {
            queens[col_of(i)] += 1;
        }
    }
    queens.iter().filter(|&&q| q > 1).count()
}

/// Fitness in `(0, 1]`.
///
/// ```
/// use u_placement::board::Chromosome;
/// use u_placement::fitness::fitness;
///
/// let solved: Chromosome = "EQEE EEEQ QEEE EEQE".parse().unwrap();
/// assert_eq!(fitness(&solved), 1.0);
/// ```
pub fn fitness(chrom: &Chromosome) -> f64 {
    let defects = threat_count(chrom) + column_penalty(chrom);
    1.0 / (1.0 + defects as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Chromosome {
        s.parse().expect("valid board")
    }

    #[test]
    fn test_empty_board_is_optimal() {
        let b = Chromosome::empty();
        assert_eq!(threat_count(&b), 0);
        assert_eq!(column_penalty(&b), 0);
        assert_eq!(fitness(&b), 1.0);
    }

    #[test]
    fn test_queens_on_main_diagonal() {
        let b = board("QEEE EQEE EEQE EEEQ");
        // Every queen attacks every other one diagonally.
        assert_eq!(threat_count(&b), 4);
        assert_eq!(column_penalty(&b), 0);
        assert!((fitness(&b) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_four_queens_solution() {
        let b = board("EEQE QEEE EEEQ EQEE");
        assert_eq!(threat_count(&b), 0);
        assert_eq!(column_penalty(&b), 0);
        assert_eq!(fitness(&b), 1.0);
    }

    #[test]
    fn test_mutual_threat_counts_both_cells() {
        // Two rooks on the same row.
        let b = board("RERE EEEE EEEE EEEE");
        assert_eq!(threat_count(&b), 2);
    }

    #[test]
    fn test_multiply_attacked_cell_counts_once() {
        // Knight on (2, 1) is attacked by rooks on (2, 3) and (0, 1);
        // the knight itself attacks (0, 0), which is empty.
        let b = board("EREE EEEE EKER EEEE");
        let threatened = threatened_cells(&b);
        assert!(threatened[9]);
        // (0, 1) and (2, 3) share neither row nor column.
        assert!(!threatened[1]);
        assert!(!threatened[11]);
        assert_eq!(threat_count(&b), 1);
    }

    #[test]
    fn test_one_sided_attack() {
        // Bishop on (0, 0) attacks knight on (1, 1); the knight does not
        // attack back.
        let b = board("BEEE EKEE EEEE EEEE");
        let threatened = threatened_cells(&b);
        assert!(threatened[5]);
        assert!(!threatened[0]);
        assert_eq!(threat_count(&b), 1);
    }

    #[test]
    fn test_knights_attack_each_other() {
        let b = board("KEEE EEKE EEEE EEEE");
        assert_eq!(threat_count(&b), 2);
    }

    #[test]
    fn test_column_penalty_counts_columns() {
        // Three queens in column 0: one column, penalty 1.
        let b = board("QEEE QEEE QEEE EEEE");
        assert_eq!(column_penalty(&b), 1);

        // Two queens in column 0, two in column 3.
        let b = board("QEEQ EEEE QEEQ EEEE");
        assert_eq!(column_penalty(&b), 2);

        // Rooks stacked in a column are not penalised.
        let b = board("REEE REEE EEEE EEEE");
        assert_eq!(column_penalty(&b), 0);
    }

    #[test]
    fn test_fitness_combines_threats_and_penalty() {
        let b = board("QEEE EEEE QEEE EEEE");
        // Both queens threatened, one stacked column.
        assert_eq!(threat_count(&b), 2);
        assert_eq!(column_penalty(&b), 1);
        assert!((fitness(&b) - 0.25).abs() < 1e-12);
    }
}
