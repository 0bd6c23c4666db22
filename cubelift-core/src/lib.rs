//! Block encoder core: turns a small fixed-size block of scalars (floats or
//! integers, 1-, 2-, or 3-dimensional) into a bounded-length bit-packed
//! representation, writing directly into a caller-owned word buffer shared
//! concurrently across many blocks.
//!
//! The pipeline per block is: exponent alignment and quantization (floats
//! only) -> integer lifting transform -> coefficient reorder and negabinary
//! remap -> embedded bit-plane coding into the block's disjoint bit range.

mod bitplane;
mod driver;
mod kind;
mod lift;
mod negabinary;
mod params;
mod quantize;
mod reorder;
mod tables;
mod writer;

#[cfg(test)]
mod test;

pub use kind::{FloatScalar, IntLane, UIntLane};
pub use params::{BlockSize, EncodeParams, ScalarKind};
pub use writer::BlockWriter;

use std::sync::atomic::AtomicU64;

/// Encodes one d-dimensional block of a floating-point scalar kind into the
/// shared word buffer at `block_idx`, under `params`.
///
/// `params` is the only way to reach `maxbits` here -- it was already
/// validated against the kind/block-size ceiling by [`EncodeParams::new`],
/// so this entry point (and everything it calls) stays infallible.
///
/// `block` must have exactly `params.block_size().len()` elements; this is a
/// caller-maintained precondition, not validated here (see module docs for
/// [`params`]).
pub fn encode_float_block<F: FloatScalar, const N: usize>(
    block: &[F],
    params: &EncodeParams,
    block_idx: usize,
    words: &[AtomicU64],
) {
    debug_assert_eq!(block.len(), N);
    let maxbits = params.maxbits();
    tracing::trace!(block_idx, maxbits, n = N, "encode_float_block");
    let mut writer = BlockWriter::new(words, maxbits, block_idx);
    driver::encode_float::<F, N>(block, &mut writer);
}

/// Encodes one d-dimensional block of an integer scalar kind into the
/// shared word buffer at `block_idx`, under `params`. See
/// [`encode_float_block`] for why `maxbits` is only reachable through
/// `params`.
pub fn encode_int_block<I: IntLane, const N: usize>(
    block: &[I],
    params: &EncodeParams,
    block_idx: usize,
    words: &[AtomicU64],
) {
    debug_assert_eq!(block.len(), N);
    let maxbits = params.maxbits();
    tracing::trace!(block_idx, maxbits, n = N, "encode_int_block");
    let mut writer = BlockWriter::new(words, maxbits, block_idx);
    driver::encode_int::<I, N>(block, &mut writer);
}
