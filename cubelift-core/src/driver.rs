//! Per-block driver (C8): wires together exponent scan, quantization,
//! lifting transform, reorder, and bit-plane coding for one block, float
//! or integer.

use crate::bitplane;
use crate::kind::{FloatScalar, IntLane, UIntLane};
use crate::lift;
use crate::quantize;
use crate::reorder;
use crate::writer::BlockWriter;

/// Encodes one floating-point block.
///
/// Writes a biased-exponent header (`EBITS + 1` bits) followed by the
/// bit-plane-coded coefficients, unless the block is all-zero (within the
/// quantizer's tolerance), in which case nothing at all is written.
pub(crate) fn encode_float<F: FloatScalar, const N: usize>(block: &[F], w: &mut BlockWriter) {
    let emax = quantize::max_exponent(block);
    let maxprec = quantize::max_precision::<F>(emax);
    let e = if maxprec > 0 { emax + F::EBIAS } else { 0 };
    if e == 0 {
        return;
    }
    tracing::trace!(emax, maxprec, e, "encode_float block header");
    w.write_bits((2 * e + 1) as u64, F::EBITS + 1);

    let mut iblock: [F::Int; N] = quantize::quantize_block(block, emax);
    lift::forward_transform::<F::Int, N>(&mut iblock);

    let mut ublock = [<F::Int as IntLane>::UInt::ZERO; N];
    reorder::reorder_and_map::<F::Int, N>(&iblock, &mut ublock);

    bitplane::encode_bitplanes(&ublock, F::PRECISION, maxprec, w);
}

/// Encodes one integer block. No header, no adaptive precision cutoff:
/// every bit plane down to 0 is a candidate for coding, truncated only by
/// the writer's budget.
pub(crate) fn encode_int<I: IntLane, const N: usize>(block: &[I], w: &mut BlockWriter) {
    let mut iblock = [I::ZERO; N];
    iblock.copy_from_slice(block);
    lift::forward_transform::<I, N>(&mut iblock);

    let mut ublock = [I::UInt::ZERO; N];
    reorder::reorder_and_map::<I, N>(&iblock, &mut ublock);

    bitplane::encode_bitplanes(&ublock, I::WIDTH, I::WIDTH, w);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    fn run_float<F: FloatScalar, const N: usize>(block: &[F], maxbits: u32) -> Vec<u64> {
        let words = vec![AtomicU64::new(0); (maxbits as usize) / 64 + 2];
        let mut w = BlockWriter::new(&words, maxbits, 0);
        encode_float::<F, N>(block, &mut w);
        words.iter().map(|a| a.load(Ordering::Relaxed)).collect()
    }

    fn run_int<I: IntLane, const N: usize>(block: &[I], maxbits: u32) -> Vec<u64> {
        let words = vec![AtomicU64::new(0); (maxbits as usize) / 64 + 2];
        let mut w = BlockWriter::new(&words, maxbits, 0);
        encode_int::<I, N>(block, &mut w);
        words.iter().map(|a| a.load(Ordering::Relaxed)).collect()
    }

    #[test]
    fn all_zero_float_block_writes_nothing() {
        let block = [0.0f32; 16];
        let out = run_float::<f32, 16>(&block, 512);
        assert!(out.iter().all(|&w| w == 0));
    }

    #[test]
    fn constant_float_block_writes_a_nonzero_header() {
        let block = [1.0f32; 4];
        let out = run_float::<f32, 4>(&block, 256);
        assert!(out.iter().any(|&w| w != 0));
    }

    #[test]
    fn all_zero_int_block_writes_nothing() {
        let block = [0i32; 4];
        let out = run_int::<i32, 4>(&block, 256);
        assert!(out.iter().all(|&w| w == 0));
    }

    #[test]
    fn nonzero_int_block_writes_something_given_any_budget() {
        let block = [1i32, 0, 0, 0];
        let out = run_int::<i32, 4>(&block, 256);
        assert!(out.iter().any(|&w| w != 0));
    }

    #[test]
    fn zero_maxbits_writes_nothing_for_any_block() {
        let block = [123.0f64, -9.0, 4.0, 2.0];
        let out = run_float::<f64, 4>(&block, 0);
        assert!(out.iter().all(|&w| w == 0));
    }
}
