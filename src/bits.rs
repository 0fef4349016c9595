//! Fixed-size, read-only bitmaps backed by 64-bit words.
//!
//! Bits are addressed in MSB-first order: bit 0 is the high bit of the first word,
//! which is also the high bit of the first byte when built with [Bitmap::from_bytes].

use crate::errors::RangeError;

/// Between 0 and 64 bits, right-aligned. The caller tracks how many are meaningful.
pub type Block = u64;

/// Number of bits held by one [Block].
pub const BITS_PER_BLOCK: usize = Block::BITS as usize;

const BYTES_PER_BLOCK: usize = BITS_PER_BLOCK / 8;

/// An immutable sequence of bits.
///
/// There is no way to mutate a bitmap once it is built, so a single instance can be
/// shared by reference (or behind an `Arc`) between any number of
/// [crate::bit_reader::Reader]s and threads.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "crate::serde::BitmapDef", into = "crate::serde::BitmapDef")
)]
pub struct Bitmap {
    size: usize,
    store: Box<[Block]>,
}

impl Bitmap {
    /// Creates a bitmap of `size` bits, all zero.
    #[must_use]
    pub fn zeroed(size: usize) -> Self {
        Self {
            size,
            store: vec![0; size.div_ceil(BITS_PER_BLOCK)].into_boxed_slice(),
        }
    }

    /// Creates a bitmap holding every bit of `bytes`. The last block is zero-padded.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let store = bytes
            .chunks(BYTES_PER_BLOCK)
            .map(|chunk| {
                let mut buf = [0u8; BYTES_PER_BLOCK];
                buf[..chunk.len()].copy_from_slice(chunk);
                Block::from_be_bytes(buf)
            })
            .collect();

        Self {
            size: bytes.len() * 8,
            store,
        }
    }

    /// Creates a bitmap from explicit blocks; every bit of every block is valid.
    ///
    /// Handy for spelling out exact bit patterns in tests.
    #[must_use]
    pub fn from_blocks(blocks: impl Into<Box<[Block]>>) -> Self {
        let store = blocks.into();

        Self {
            size: store.len() * BITS_PER_BLOCK,
            store,
        }
    }

    /// Assembles a bitmap without checking that `store` matches `size`.
    #[cfg(feature = "serde")]
    pub(crate) fn from_raw_parts(size: usize, store: Box<[Block]>) -> Self {
        Self { size, store }
    }

    /// Total number of bits.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the bitmap holds no bits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The backing blocks, MSB-first. Bits past [Bitmap::size] are zero.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.store
    }

    /// Returns `length` bits starting at `index`, right-aligned.
    ///
    /// The start index is validated first, so a zero-length read still fails when
    /// `index` is out of range. Otherwise a zero-length read returns 0.
    pub fn get(&self, index: usize, length: usize) -> Result<Block, RangeError> {
        if index >= self.size {
            return Err(RangeError::IndexOutOfRange);
        }

        if length == 0 {
            return Ok(0);
        }

        if length > BITS_PER_BLOCK {
            return Err(RangeError::LengthOutOfRange);
        }

        // index < size, so the subtraction cannot wrap
        if length - 1 >= self.size - index {
            return Err(RangeError::LengthExceedsRange);
        }

        let store_index = index / BITS_PER_BLOCK;

        // Position of the last requested bit, relative to the block holding the first.
        let end_bit_index = index % BITS_PER_BLOCK + length - 1;

        let buf = if end_bit_index < BITS_PER_BLOCK {
            self.store[store_index] >> (BITS_PER_BLOCK - end_bit_index - 1)
        } else {
            // 1..=63 bits come from the next block
            let overflow = end_bit_index - BITS_PER_BLOCK + 1;
            (self.store[store_index] << overflow)
                | (self.store[store_index + 1] >> (BITS_PER_BLOCK - overflow))
        };

        let mask = Block::MAX >> (BITS_PER_BLOCK - length);
        Ok(buf & mask)
    }
}

impl From<&[u8]> for Bitmap {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}
