// src/basis.rs
// Structure constants of the octonion algebra.
// Entry [i][j] encodes e_i * e_j = sign * e_index.
// Basis labels: e0 = 1, e1 = i, e2 = j, e3 = k, e4 = l, e5 = il, e6 = jl, e7 = kl.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BasisProduct {
    pub index: usize,
    pub sign: i8,
}

const fn bp(index: usize, sign: i8) -> BasisProduct {
    BasisProduct { index, sign }
}

// ============================================================================
// Cayley Table (Fano plane labelling)
// ============================================================================
pub const MULT_TABLE: [[BasisProduct; 8]; 8] = [
    // e0 (identity)
    [bp(0, 1), bp(1, 1), bp(2, 1), bp(3, 1), bp(4, 1), bp(5, 1), bp(6, 1), bp(7, 1)],
    // e1 (i)
    [bp(1, 1), bp(0, -1), bp(3, 1), bp(2, -1), bp(5, 1), bp(4, -1), bp(7, -1), bp(6, 1)],
    // e2 (j)
    [bp(2, 1), bp(3, -1), bp(0, -1), bp(1, 1), bp(6, 1), bp(7, 1), bp(4, -1), bp(5, -1)],
    // e3 (k)
    [bp(3, 1), bp(2, 1), bp(1, -1), bp(0, -1), bp(7, 1), bp(6, -1), bp(5, 1), bp(4, -1)],
    // e4 (l)
    [bp(4, 1), bp(5, -1), bp(6, -1), bp(7, -1), bp(0, -1), bp(1, 1), bp(2, 1), bp(3, 1)],
    // e5 (il)
    [bp(5, 1), bp(4, 1), bp(7, -1), bp(6, 1), bp(1, -1), bp(0, -1), bp(3, -1), bp(2, 1)],
    // e6 (jl)
    [bp(6, 1), bp(7, 1), bp(4, 1), bp(5, -1), bp(2, -1), bp(3, 1), bp(0, -1), bp(1, -1)],
    // e7 (kl)
    [bp(7, 1), bp(6, -1), bp(5, 1), bp(4, 1), bp(3, -1), bp(2, -1), bp(1, 1), bp(0, -1)],
];

/// The seven oriented lines of the Fano plane: for [a, b, c],
/// e_a * e_b = e_c and every cyclic rotation of the triple holds too.
pub const FANO_TRIPLES: [[usize; 3]; 7] = [
    [1, 2, 3],
    [1, 4, 5],
    [1, 7, 6],
    [2, 4, 6],
    [2, 5, 7],
    [3, 4, 7],
    [3, 6, 5],
];

/// Looks up e_i * e_j. Both indices must be in 0..8.
#[inline(always)]
pub fn product(i: usize, j: usize) -> BasisProduct {
    MULT_TABLE[i][j]
}
