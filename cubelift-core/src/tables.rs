//! Fixed per-block-size tables: the coefficient reorder permutations.
//!
//! Each table maps output position `i` to the input (lifted-transform)
//! coefficient index that should land there, ordered by ascending L1
//! frequency (sum of per-axis indices) with ties broken by the natural
//! (x-fastest) index. Lower frequency means the coefficient carries more
//! energy for smooth inputs, so low frequencies are coded first.

pub const PERM_1D: [u8; 4] = [0, 1, 2, 3];

pub const PERM_2D: [u8; 16] = [
    0, 1, 4, 2, 5, 8, 3, 6, 9, 12, 7, 10, 13, 11, 14, 15,
];

pub const PERM_3D: [u8; 64] = [
    0, 1, 4, 16, 2, 5, 8, 17, 20, 32, 3, 6, 9, 12, 18, 21, 24, 33, 36, 48, 7, 10, 13, 19, 22, 25,
    28, 34, 37, 40, 49, 52, 11, 14, 23, 26, 29, 35, 38, 41, 44, 50, 53, 56, 15, 27, 30, 39, 42,
    45, 51, 54, 57, 60, 31, 43, 46, 55, 58, 61, 47, 59, 62, 63,
];

/// Returns the reorder permutation for a block of `n` scalars, where `n` is
/// `4`, `16`, or `64`.
pub const fn perm_for(n: usize) -> &'static [u8] {
    match n {
        4 => &PERM_1D,
        16 => &PERM_2D,
        64 => &PERM_3D,
        _ => panic!("unsupported block size"),
    }
}
