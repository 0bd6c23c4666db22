//! Integer lifting transform (C4): a reversible (up to low-order bits),
//! integer-only approximation of a orthogonal wavelet transform, applied
//! independently along each axis of the block.
//!
//! The transform is specified only in the forward direction -- decoding is
//! out of scope for this crate -- but its structure (four lifting steps
//! per 4-point group) is exactly the one used by block transform codecs of
//! this family.

use crate::kind::IntLane;

/// Applies the forward lift to one contiguous-with-`stride` 4-point group
/// starting at `base`.
///
/// Final storage order along the stride is `(w, z, y, x)`: the first input
/// element ends up last.
fn lift_group<I: IntLane>(block: &mut [I], base: usize, stride: usize) {
    let mut x = block[base];
    let mut y = block[base + stride];
    let mut z = block[base + 2 * stride];
    let mut w = block[base + 3 * stride];

    x = x.wrapping_add(w);
    x = x >> 1;
    w = w.wrapping_sub(x);

    z = z.wrapping_add(y);
    z = z >> 1;
    y = y.wrapping_sub(z);

    x = x.wrapping_add(z);
    x = x >> 1;
    z = z.wrapping_sub(x);

    w = w.wrapping_add(y);
    w = w >> 1;
    y = y.wrapping_sub(w);

    w = w.wrapping_add(y >> 1);
    y = y.wrapping_sub(w >> 1);

    block[base] = w;
    block[base + stride] = z;
    block[base + 2 * stride] = y;
    block[base + 3 * stride] = x;
}

/// Applies the forward lift independently along every axis of an
/// `N`-element block (`N` one of 4, 16, 64), in x, then y, then z order.
pub fn forward_transform<I: IntLane, const N: usize>(block: &mut [I; N]) {
    match N {
        4 => lift_group(block, 0, 1),
        16 => {
            for row in 0..4 {
                lift_group(block, row * 4, 1);
            }
            for col in 0..4 {
                lift_group(block, col, 4);
            }
        }
        64 => {
            for a in 0..4 {
                for b in 0..4 {
                    lift_group(block, a * 4 + b * 16, 1);
                }
            }
            for a in 0..4 {
                for b in 0..4 {
                    lift_group(block, a + b * 16, 4);
                }
            }
            for a in 0..4 {
                for b in 0..4 {
                    lift_group(block, a + b * 4, 16);
                }
            }
        }
        _ => unreachable!("unsupported block size {N}"),
    }
}
