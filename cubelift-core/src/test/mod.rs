//! End-to-end scenarios and cross-module properties, exercised through the
//! two public entry points rather than any individual module's internals.


use std::sync::atomic::{AtomicU64, Ordering};

pub(crate) fn words(n: usize) -> Vec<AtomicU64> {
    (0..n).map(|_| AtomicU64::new(0)).collect()
}

pub(crate) fn load_all(words: &[AtomicU64]) -> Vec<u64> {
    words.iter().map(|w| w.load(Ordering::Relaxed)).collect()
}
