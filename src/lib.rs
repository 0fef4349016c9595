//! # bitcursor
//!
//! Read-only bitmaps and a sequential bit reader for parsing bit-packed binary
//! formats, where fields are narrower than a byte or straddle byte boundaries.
//!
//! A [Bitmap] is built once from bytes and answers random-access range queries of up
//! to 64 bits. A [Reader] walks a bitmap field by field; its first failure is
//! latched, so a parser can issue every read and check for an error once at the end.
//!
//! ## Example
//!
//! ```
//! use bitcursor::{Bitmap, Reader};
//!
//! let bitmap = Bitmap::from_bytes(&[0xb0, 0x3a, 0x87]);
//! assert_eq!(bitmap.get(4, 8), Ok(0x03));
//!
//! let mut reader = Reader::new(&bitmap);
//! let version = reader.read_bits(4).unwrap_or_default();
//! let category = reader.read_byte().unwrap_or_default();
//! let is_x = reader.read_bool().unwrap_or_default();
//! let created = reader.read_field(32, "read created").unwrap_or_default();
//!
//! assert_eq!((version, category, is_x), (11, 3, true));
//! assert_eq!(created, 0);
//! assert_eq!(
//!     reader.finish().unwrap_err().to_string(),
//!     "read created: read bits (index=13, length=32): bits: length extends beyond range"
//! );
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [Bitmap], see [serde::BitmapDef].

pub mod bit_reader;
pub mod bits;
pub mod errors;
#[cfg(feature = "serde")]
pub mod serde;

pub use bit_reader::Reader;
pub use bits::{Bitmap, Block};
pub use errors::{RangeError, ReadError};
