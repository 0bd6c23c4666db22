//! Negabinary (folded two's-complement) remap: turns a signed lifted
//! coefficient into an unsigned value whose bit-plane representation is
//! monotone in magnitude, which is what makes embedded bit-plane coding
//! possible.

use crate::kind::{IntLane, UIntLane};

/// `(x + M) ^ M`, where `M = 0xAAAA...` is the alternating-bit mask for the
/// lane width. Bijective on the full `2^W` residue ring; see
/// [`uint_to_int`] for the inverse.
pub fn int_to_uint<I: IntLane>(x: I) -> I::UInt {
    let m = <I::UInt as UIntLane>::NEGABINARY_MASK;
    let ux = x.to_bits();
    ux.wrapping_add(m) ^ m
}

/// Inverse of [`int_to_uint`]. Note this is `(y ^ M) - M`, not the same
/// expression applied twice -- folding is an involution only for masks
/// that are their own additive inverse mod `2^W`, which `0xAAAA...` is not.
pub fn uint_to_int<I: IntLane>(u: I::UInt) -> I {
    let m = <I::UInt as UIntLane>::NEGABINARY_MASK;
    let v = (u ^ m).wrapping_sub(m);
    I::from_bits(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_i32_samples() {
        for x in [0i32, 1, -1, 2, -2, 7, -7, i32::MAX, i32::MIN, 12345, -54321] {
            let u = int_to_uint::<i32>(x);
            assert_eq!(uint_to_int::<i32>(u), x, "x={x}");
        }
    }

    #[test]
    fn round_trips_i64_samples() {
        for x in [0i64, 1, -1, i64::MAX, i64::MIN, 98765432123, -1] {
            let u = int_to_uint::<i64>(x);
            assert_eq!(uint_to_int::<i64>(u), x, "x={x}");
        }
    }
}
