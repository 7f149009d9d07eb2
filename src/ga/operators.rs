//! Generic fixed-length genetic operators.
//!
//! Crossover and mutation operators for fixed-length chromosomes. They
//! operate on `[T; N]` gene arrays and know nothing about what a gene
//! means; problem-specific invariants are restored afterwards by
//! [`GaProblem::repair`](super::GaProblem::repair).
//!
//! # Crossover Operators
//!
//! - [`single_point_crossover`]: Exchange the tails after a cut point — O(n)
//!
//! # Mutation Operators
//!
//! - [`swap_mutation`]: Exchange two random positions — O(1)

use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Single-point crossover.
///
/// Child 1 takes `parent1[..point]` followed by `parent2[point..]`; child 2
/// takes the complementary halves. A `point` of `0` or `N` yields clones.
///
/// The genes of both children together are exactly the genes of both
/// parents together.
///
/// # Panics
/// Panics if `point > N`.
pub fn single_point_crossover<T: Copy, const N: usize>(
    parent1: &[T; N],
    parent2: &[T; N],
    point: usize,
) -> ([T; N], [T; N]) {
    assert!(point <= N, "crossover point {point} exceeds length {}", N);

    let mut child1 = *parent1;
    let mut child2 = *parent2;
    child1[point..].copy_from_slice(&parent2[point..]);
    child2[point..].copy_from_slice(&parent1[point..]);
    (child1, child2)
}

/// Draws a cut point in `1..n`, so that both children mix genes from both
/// parents.
///
/// Returns `0` when `n < 2`.
pub fn random_cut_point<R: Rng>(n: usize, rng: &mut R) -> usize {
    if n < 2 {
        return 0;
    }
    rng.random_range(1..n)
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Swap mutation: exchange two positions drawn independently.
///
/// The two positions may coincide, in which case nothing changes.
///
/// # Complexity
/// O(1)
pub fn swap_mutation<T, R: Rng>(genes: &mut [T], rng: &mut R) {
    let n = genes.len();
    if n < 2 {
        return;
    }
    let i = rng.random_range(0..n);
    let j = rng.random_range(0..n);
    genes.swap(i, j);
}

// ============================================================================
// Tests
// ============================================================================
