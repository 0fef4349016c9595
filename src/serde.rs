//! Serializable bitmap description.
//!
//! A [Bitmap] serializes as its bit size plus its backing blocks. Deserializing goes
//! through [BitmapDef] so an inconsistent description is rejected instead of
//! producing a bitmap whose reads would run off the end of its store.

use serde::{Deserialize, Serialize};

use crate::{
    bits::{BITS_PER_BLOCK, Bitmap, Block},
    errors::DefError,
};

/// Wire shape of a [Bitmap].
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct BitmapDef {
    /// Number of valid bits.
    pub size: usize,
    /// Backing blocks, MSB-first; exactly `ceil(size / 64)` of them.
    pub blocks: Vec<Block>,
}

impl From<Bitmap> for BitmapDef {
    fn from(value: Bitmap) -> Self {
        BitmapDef {
            size: value.size(),
            blocks: value.blocks().to_vec(),
        }
    }
}

impl TryFrom<BitmapDef> for Bitmap {
    type Error = DefError;

    fn try_from(value: BitmapDef) -> Result<Self, Self::Error> {
        let expected = value.size.div_ceil(BITS_PER_BLOCK);
        if value.blocks.len() != expected {
            log::debug!(
                "rejecting bitmap of {} bits with {} blocks",
                value.size,
                value.blocks.len()
            );
            return Err(DefError::StoreLength {
                expected,
                actual: value.blocks.len(),
            });
        }

        let used = value.size % BITS_PER_BLOCK;
        let padding_set = used != 0
            && value
                .blocks
                .last()
                .is_some_and(|last| last & (Block::MAX >> used) != 0);

        if padding_set {
            log::debug!("rejecting bitmap of {} bits with set padding", value.size);
            return Err(DefError::NonZeroPadding { size: value.size });
        }

        Ok(Bitmap::from_raw_parts(value.size, value.blocks.into_boxed_slice()))
    }
}
