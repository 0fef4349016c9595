//! Sequential, forward-only reads over a [Bitmap].

use crate::{
    bits::{Block, Bitmap},
    errors::ReadError,
};

const BITS_PER_BOOL: usize = 1;
const BITS_PER_BYTE: usize = 8;

#[derive(Debug, Clone)]
enum State {
    Active,
    Errored(ReadError),
}

/// Reads successive bit fields from a [Bitmap], up to 64 bits at a time.
///
/// The first failing read latches its error: the position stays where the failed
/// read started, and every later read returns that same error without touching the
/// bitmap. A parser can therefore issue a whole sequence of reads and check
/// [Reader::err] (or [Reader::finish]) once at the end.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    bitmap: &'a Bitmap,
    position: usize,
    state: State,
}

impl<'a> Reader<'a> {
    pub fn new(bitmap: &'a Bitmap) -> Self {
        Self {
            bitmap,
            position: 0,
            state: State::Active,
        }
    }

    /// Reads the next `length` bits, right-aligned.
    pub fn read_bits(&mut self, length: usize) -> Result<Block, ReadError> {
        self.read(length, None)
    }

    /// Like [Reader::read_bits], but a failure is wrapped with `context` before it is
    /// latched, so the replayed error names the field that could not be read.
    pub fn read_field(&mut self, length: usize, context: &'static str) -> Result<Block, ReadError> {
        self.read(length, Some(context))
    }

    /// Reads one bit.
    pub fn read_bool(&mut self) -> Result<bool, ReadError> {
        self.read_field(BITS_PER_BOOL, "read bool").map(|b| b == 1)
    }

    /// Reads the next 8 bits as a byte.
    pub fn read_byte(&mut self) -> Result<u8, ReadError> {
        self.read_field(BITS_PER_BYTE, "read byte").map(|b| b as u8)
    }

    /// Total number of bits in the underlying bitmap.
    #[must_use]
    pub fn size(&self) -> usize {
        self.bitmap.size()
    }

    /// Index of the next bit to be read.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of bits left after the current position.
    #[must_use]
    pub fn num_unread(&self) -> usize {
        self.size() - self.position
    }

    /// Whether any bits remain to be read.
    #[must_use]
    pub fn has_unread(&self) -> bool {
        self.position != self.size()
    }

    /// The bitmap this reader walks.
    #[must_use]
    pub fn bitmap(&self) -> &'a Bitmap {
        self.bitmap
    }

    /// The latched error, if any read has failed.
    #[must_use]
    pub fn err(&self) -> Option<&ReadError> {
        match &self.state {
            State::Active => None,
            State::Errored(err) => Some(err),
        }
    }

    /// Returns the latched error, if any, as a `Result`.
    pub fn finish(&self) -> Result<(), ReadError> {
        self.err().cloned().map_or(Ok(()), Err)
    }

    fn read(&mut self, length: usize, context: Option<&'static str>) -> Result<Block, ReadError> {
        if let State::Errored(err) = &self.state {
            return Err(err.clone());
        }

        match self.bitmap.get(self.position, length) {
            Ok(value) => {
                self.position += length;
                Ok(value)
            }
            Err(source) => {
                let mut err = ReadError::Bits {
                    index: self.position,
                    length,
                    source,
                };
                if let Some(context) = context {
                    err = err.with_context(context);
                }

                log::trace!("bit reader latched error at position {}: {err}", self.position);
                self.state = State::Errored(err.clone());
                Err(err)
            }
        }
    }
}


#[cfg(test)]
mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn position_is_sum_of_successful_reads(
            data in proptest::collection::vec(any::<u8>(), 0..32),
            lengths in proptest::collection::vec(0usize..=64, 0..16),
        ) {
            let bitmap = Bitmap::from_bytes(&data);
            let mut reader = Reader::new(&bitmap);
            let mut consumed = 0;

            for length in lengths {
                match reader.read_bits(length) {
                    Ok(_) => consumed += length,
                    Err(err) => {
                        prop_assert_eq!(reader.position(), consumed);
                        prop_assert_eq!(reader.read_bits(1), Err(err.clone()));
                        prop_assert_eq!(reader.err(), Some(&err));
                        break;
                    }
                }
            }

            prop_assert_eq!(reader.position(), consumed);
            prop_assert_eq!(reader.num_unread(), bitmap.size() - consumed);
        }
    }
}
