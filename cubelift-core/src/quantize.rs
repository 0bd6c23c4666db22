//! Exponent alignment and quantization (C3): picks a single shared exponent
//! for a float block from its max-magnitude element, then casts every
//! element to a fixed-point integer scaled by that exponent.

use crate::kind::{FloatScalar, IntLane};

/// Scans `block` and returns `exponent(max |x_i|)`; `-EBIAS` for an
/// all-zero block.
pub fn max_exponent<F: FloatScalar>(block: &[F]) -> i32 {
    let mut amax = F::ZERO;
    for &x in block {
        let ax = F::abs(x);
        if F::gt(ax, amax) {
            amax = ax;
        }
    }
    F::exponent(amax)
}

/// Number of bit planes worth encoding given the block's max exponent,
/// clamped to the lane's full precision. This is where the adaptive,
/// dynamic-range-driven precision cutoff for floating-point blocks comes
/// from: fewer bits are needed to resolve a block whose values all sit
/// near the bottom of the representable range.
pub fn max_precision<F: FloatScalar>(emax: i32) -> u32 {
    let headroom = (emax - F::min_exp() + 8).max(0) as u32;
    headroom.min(F::PRECISION)
}

/// Casts every element of `block` to the integer lane, scaled by the
/// shared exponent `emax`.
pub fn quantize_block<F: FloatScalar, const N: usize>(block: &[F], emax: i32) -> [F::Int; N] {
    let mut out = [F::Int::ZERO; N];
    for i in 0..N {
        out[i] = F::fwd_cast(block[i], emax);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_zero_block_has_sentinel_exponent() {
        let block = [0.0f32; 16];
        assert_eq!(max_exponent(&block), -f32::EBIAS);
    }

    #[test]
    fn max_exponent_tracks_largest_magnitude() {
        let block = [0.5f32, -4.0, 1.0, -0.125];
        // 4.0 = 1.0 * 2^2
        assert_eq!(max_exponent(&block), 2);
    }

    #[test]
    fn max_precision_is_zero_only_for_all_zero_block() {
        let zero_prec = max_precision::<f32>(-f32::EBIAS);
        assert!(zero_prec > 0); // maxprec itself is nonzero; biased exponent e==0 is the real sentinel.
        let normal_prec = max_precision::<f32>(2);
        assert!(normal_prec <= f32::PRECISION);
    }
}
