//! Error types for bit range extraction and sequential reads.

use thiserror::Error;

/// Errors produced by [crate::bits::Bitmap::get] when a requested range is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    /// Start index is at or beyond the bitmap size.
    #[error("bits: index out of range")]
    IndexOutOfRange,
    /// More than 64 bits were requested in a single read.
    #[error("bits: length out of range")]
    LengthOutOfRange,
    /// Start index is valid but the range runs past the end of the bitmap.
    #[error("bits: length extends beyond range")]
    LengthExceedsRange,
}

/// Errors produced by a [crate::bit_reader::Reader]. Once returned, the same error is
/// latched and replayed by every later read on that reader.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadError {
    /// A range extraction at the reader's position failed.
    #[error("read bits (index={index}, length={length}): {source}")]
    Bits {
        index: usize,
        length: usize,
        #[source]
        source: RangeError,
    },
    /// A failed read labelled by the caller, e.g. `"read bool"`.
    #[error("{context}: {source}")]
    Context {
        context: &'static str,
        #[source]
        source: Box<ReadError>,
    },
}

impl ReadError {
    /// Returns the range error at the root of this error.
    #[must_use]
    pub fn range(&self) -> RangeError {
        match self {
            ReadError::Bits { source, .. } => *source,
            ReadError::Context { source, .. } => source.range(),
        }
    }

    pub(crate) fn with_context(self, context: &'static str) -> Self {
        ReadError::Context {
            context,
            source: Box::new(self),
        }
    }
}

/// Errors produced when a serialized bitmap definition is inconsistent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefError {
    /// Number of blocks does not match the bit size.
    #[error("bitmap: expected {expected} blocks for the given size, got {actual}")]
    StoreLength { expected: usize, actual: usize },
    /// Bits past the declared size are set.
    #[error("bitmap: padding bits past size {size} are not zero")]
    NonZeroPadding { size: usize },
}
