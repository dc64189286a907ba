use std::io;

use crate::{error::Result, Encoder};

pub mod bytes;
pub mod primitive;

/// Zero bytes appended after variable-length payloads.
pub(crate) const PADDING: [u8; 3] = [0; 3];

/// Number of zero bytes needed to bring `len` up to the next multiple of 4.
pub const fn pad(len: usize) -> usize {
    (4 - len % 4) % 4
}

/// `len` rounded up to the next multiple of 4.
pub const fn padded_len(len: usize) -> usize {
    len + pad(len)
}

/// What a sink reports for a single write call.
#[derive(Debug)]
pub struct WriteOutcome {
    /// Bytes the sink took from the front of the buffer.
    pub accepted: usize,
    pub error: Option<io::Error>,
}

impl WriteOutcome {
    pub fn complete(accepted: usize) -> Self {
        Self { accepted, error: None }
    }

    pub fn failed(accepted: usize, error: io::Error) -> Self {
        Self {
            accepted,
            error: Some(error),
        }
    }
}

/// Destination for encoded bytes.
///
/// A sink writes as much of `buf` as it can and reports how many bytes it accepted together with the failure that
/// stopped it, if any. Accepting fewer bytes than offered without an error counts as a short write.
pub trait Sink {
    fn put(&mut self, buf: &[u8]) -> WriteOutcome;
}

impl<W: io::Write + ?Sized> Sink for W {
    fn put(&mut self, buf: &[u8]) -> WriteOutcome {
        let mut accepted = 0;
        while accepted < buf.len() {
            match self.write(&buf[accepted..]) {
                Ok(0) => return WriteOutcome::failed(accepted, io::ErrorKind::WriteZero.into()),
                Ok(n) => accepted += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return WriteOutcome::failed(accepted, e),
            }
        }
        WriteOutcome::complete(accepted)
    }
}

/// A value with an XDR wire representation.
pub trait Encode {
    /// Number of bytes the value occupies on the wire.
    fn encoded_len(&self) -> usize;

    /// Write the value through `enc`, returning the bytes put on the wire.
    fn write_to<S: Sink + ?Sized>(&self, enc: &mut Encoder<S>) -> Result<usize>;
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encoded_len(&self) -> usize {
        (**self).encoded_len()
    }

    fn write_to<S: Sink + ?Sized>(&self, enc: &mut Encoder<S>) -> Result<usize> {
        (**self).write_to(enc)
    }
}
