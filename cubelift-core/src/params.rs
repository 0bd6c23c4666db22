//! Ambient configuration surface: the small amount of validated setup a
//! caller does once per encoding job, kept separate from the per-block
//! hot path (which is total and never returns a `Result`; see
//! `DESIGN.md`'s notes on error-handling scope).

use cubelift_base::{err, Result};

/// Block shape: 1-, 2-, or 3-dimensional, always 4 scalars per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockSize {
    Dim1 = 4,
    Dim2 = 16,
    Dim3 = 64,
}

impl BlockSize {
    pub const fn len(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for BlockSize {
    type Error = cubelift_base::Error;

    fn try_from(n: usize) -> Result<Self> {
        match n {
            4 => Ok(BlockSize::Dim1),
            16 => Ok(BlockSize::Dim2),
            64 => Ok(BlockSize::Dim3),
            other => Err(err(format!(
                "unsupported block size {other}: must be 4, 16, or 64"
            ))),
        }
    }
}

/// Scalar kind the block holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    F32,
    F64,
    I32,
    I64,
}

impl ScalarKind {
    /// Full bit width of the working integer lane for this kind (equal to
    /// the scalar's own width).
    pub const fn precision(self) -> u32 {
        match self {
            ScalarKind::F32 | ScalarKind::I32 => 32,
            ScalarKind::F64 | ScalarKind::I64 => 64,
        }
    }
}

/// A validated (kind, block size, bit budget) triple for one encoding job.
#[derive(Debug, Clone, Copy)]
pub struct EncodeParams {
    kind: ScalarKind,
    block_size: BlockSize,
    maxbits: u32,
}

impl EncodeParams {
    /// Validates `maxbits` against the per-block-size ceiling: one header
    /// field (`EBITS + 1` bits) for float kinds plus `precision` bits per
    /// scalar, the loosest bound the encoder could ever need.
    pub fn new(kind: ScalarKind, block_size: BlockSize, maxbits: u32) -> Result<Self> {
        let header_bits = match kind {
            ScalarKind::F32 => 8 + 1,
            ScalarKind::F64 => 11 + 1,
            ScalarKind::I32 | ScalarKind::I64 => 0,
        };
        let ceiling = header_bits + block_size.len() as u32 * kind.precision();
        if maxbits > ceiling {
            return Err(err(format!(
                "maxbits {maxbits} exceeds ceiling {ceiling} for {kind:?}/{block_size:?}"
            )));
        }
        tracing::debug!(?kind, ?block_size, maxbits, "validated encode params");
        Ok(EncodeParams {
            kind,
            block_size,
            maxbits,
        })
    }

    pub fn kind(&self) -> ScalarKind {
        self.kind
    }
    pub fn block_size(&self) -> BlockSize {
        self.block_size
    }
    pub fn maxbits(&self) -> u32 {
        self.maxbits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_maxbits_beyond_ceiling() {
        let result = EncodeParams::new(ScalarKind::F32, BlockSize::Dim1, 10_000);
        assert!(result.is_err());
    }

    #[test]
    fn accepts_maxbits_at_ceiling() {
        let result = EncodeParams::new(ScalarKind::I32, BlockSize::Dim2, 16 * 32);
        assert!(result.is_ok());
    }

    #[test]
    fn block_size_round_trips_through_try_from() {
        assert_eq!(BlockSize::try_from(16).unwrap(), BlockSize::Dim2);
        assert!(BlockSize::try_from(5).is_err());
    }
}
