//! Coefficient reorder and negabinary remap (C5): applies the fixed
//! frequency-ascending permutation to the lifted coefficients and folds
//! each into its unsigned negabinary representation in one pass.

use crate::kind::IntLane;
use crate::negabinary;
use crate::tables;

/// `out[i] = int_to_uint(iblock[perm[i]])` for the permutation matching
/// `iblock`'s length.
pub fn reorder_and_map<I: IntLane, const N: usize>(
    iblock: &[I; N],
    out: &mut [I::UInt; N],
) {
    let perm = tables::perm_for(N);
    for i in 0..N {
        out[i] = negabinary::int_to_uint(iblock[perm[i] as usize]);
    }
}
