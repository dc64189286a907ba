//! Sequential encoder for the XDR-style wire format.
//!
//! Scalars are big-endian and padded to 4 bytes (`u64` takes 8). Byte strings and strings are a 4-byte length,
//! the raw bytes and zero padding up to the next 4-byte boundary.
//!
//! ```
//! use xdr_encoder::Encoder;
//!
//! let mut enc = Encoder::new(Vec::new());
//! enc.write_u32(7).unwrap();
//! enc.write_str("hi").unwrap();
//! assert_eq!(enc.total(), 12);
//! assert_eq!(enc.into_inner(), b"\x00\x00\x00\x07\x00\x00\x00\x02hi\x00\x00".to_vec());
//! ```

pub use encoder::{Encoder, DEFAULT_MAX_DEBUG_BYTES};
pub use error::{Result, XdrError};
pub use writer::{pad, padded_len, Encode, Sink, WriteOutcome};

mod encoder;
mod error;
pub mod writer;
