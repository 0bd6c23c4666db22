//! Embedded bit-plane / group-test coder (C7): encodes the unsigned,
//! negabinary-mapped coefficients plane by plane, from most to least
//! significant, coding which coefficients have just become significant via
//! a group test plus unary run rather than a flat per-coefficient flag.
//!
//! Terminates as soon as either all bit planes down to `kmin` are coded or
//! the writer's budget is exhausted -- whichever comes first.

use crate::kind::UIntLane;
use crate::writer::BlockWriter;

/// Encodes `u` plane by plane into `w`.
///
/// `intprec` is the lane's full bit width; `maxprec` is how many of its
/// top planes are worth coding (for integer blocks these are equal; for
/// float blocks `maxprec` is clamped by the block's dynamic range). Planes
/// `intprec-1` down to `kmin = intprec - maxprec` are visited.
pub fn encode_bitplanes<U: UIntLane>(u: &[U], intprec: u32, maxprec: u32, w: &mut BlockWriter) {
    if maxprec == 0 {
        return;
    }
    let size = u.len() as u32;
    let kmin = intprec.saturating_sub(maxprec);
    let mut n: u32 = 0;
    let mut k = intprec;
    while k > kmin {
        k -= 1;
        if w.exhausted() {
            break;
        }

        // Bit plane k, bit i holding bit k of u[i].
        let mut x: u64 = 0;
        for (i, &ui) in u.iter().enumerate() {
            if ui.bit(k) {
                x |= 1u64 << i;
            }
        }

        // 1. Raw-bits step: coefficients already known significant get
        // their plane-k bit emitted directly, no test needed.
        x = w.write_bits(x, n);

        // 2. Group-test / unary step: discover any newly-significant
        // coefficients among the remaining (size - n) of them.
        while n < size && !w.exhausted() {
            let test = x != 0;
            w.write_bit(test);
            if !test {
                break;
            }
            loop {
                if w.exhausted() {
                    break;
                }
                if n == size - 1 {
                    // Exactly one coefficient left unresolved: its bit is
                    // the whole remaining tail of `x`, so write it directly
                    // and end the plane instead of group-testing a group of
                    // one (which would just loop forever re-testing the
                    // same unconsumed `x`).
                    w.write_bit((x & 1) != 0);
                    n += 1;
                    break;
                }
                let bit = (x & 1) != 0;
                w.write_bit(bit);
                x >>= 1;
                n += 1;
                if !bit {
                    break;
                }
            }
        }
    }
}
