use std::{io, time::Instant};

use crate::{
    error::{Result, XdrError},
    writer::{pad, Encode, Sink, PADDING},
};

/// Default number of payload bytes shown in debug dumps.
pub const DEFAULT_MAX_DEBUG_BYTES: usize = 32;

/// Sequential XDR encoder writing into an owned [`Sink`].
///
/// Every write returns the number of bytes it put on the wire. The first sink failure is latched: from then on
/// every write returns that same failure without touching the sink, the byte total or the timestamp.
#[derive(Debug)]
pub struct Encoder<S: ?Sized> {
    total: usize,
    last_write: Option<Instant>,
    error: Option<XdrError>,
    max_debug_bytes: usize,
    sink: S,
}

impl<S: Sink> Encoder<S> {
    pub fn new(sink: S) -> Self {
        Self {
            total: 0,
            last_write: None,
            error: None,
            max_debug_bytes: DEFAULT_MAX_DEBUG_BYTES,
            sink,
        }
    }

    /// Limit debug dumps of byte payloads to the first `max` bytes.
    pub fn with_max_debug_bytes(mut self, max: usize) -> Self {
        self.max_debug_bytes = max;
        self
    }

    pub fn into_inner(self) -> S {
        self.sink
    }
}

impl<S: Sink + ?Sized> Encoder<S> {
    pub fn write_bool(&mut self, v: bool) -> Result<usize> {
        self.begin()?;
        log::trace!("wr bool={}", v);
        self.emit(&u32::from(v).to_be_bytes())
    }

    /// Write `v` in the high half of a 4-byte word.
    pub fn write_u16(&mut self, v: u16) -> Result<usize> {
        self.begin()?;
        log::trace!("wr uint16={}", v);
        let [hi, lo] = v.to_be_bytes();
        self.emit(&[hi, lo, 0, 0])
    }

    pub fn write_u32(&mut self, v: u32) -> Result<usize> {
        self.begin()?;
        log::trace!("wr uint32={}", v);
        self.emit(&v.to_be_bytes())
    }

    pub fn write_u64(&mut self, v: u64) -> Result<usize> {
        self.begin()?;
        log::trace!("wr uint64={}", v);
        self.emit(&v.to_be_bytes())
    }

    /// Write a length prefix, the payload and the zero padding up to the next 4-byte boundary.
    ///
    /// Stops at the first failing piece; nothing after it is written.
    pub fn write_bytes(&mut self, bs: &[u8]) -> Result<usize> {
        if let Some(err) = &self.error {
            return Err(err.with_accepted(0));
        }
        let len = length_prefix(bs.len())?;
        self.last_write = Some(Instant::now());
        log::trace!("wr uint32={}", len);
        self.dump(bs);

        let mut written = 0;
        for piece in [&len.to_be_bytes()[..], bs, &PADDING[..pad(bs.len())]] {
            if piece.is_empty() {
                continue;
            }
            written = self.put(piece, written)?;
        }
        Ok(written)
    }

    pub fn write_str(&mut self, s: &str) -> Result<usize> {
        self.write_bytes(s.as_bytes())
    }

    pub fn write<T: Encode + ?Sized>(&mut self, value: &T) -> Result<usize> {
        value.write_to(self)
    }

    /// Bytes accepted by the sink so far, including those of partially written values.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn error(&self) -> Option<&XdrError> {
        self.error.as_ref()
    }

    /// Start of the most recent write attempt.
    pub fn last_write(&self) -> Option<Instant> {
        self.last_write
    }

    pub fn get_ref(&self) -> &S {
        &self.sink
    }

    pub fn get_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    fn begin(&mut self) -> Result<()> {
        if let Some(err) = &self.error {
            return Err(err.with_accepted(0));
        }
        self.last_write = Some(Instant::now());
        Ok(())
    }

    fn emit(&mut self, buf: &[u8]) -> Result<usize> {
        self.put(buf, 0)
    }

    /// Hand `buf` to the sink, counting what it accepted on top of `written` bytes already put by this call.
    fn put(&mut self, buf: &[u8], written: usize) -> Result<usize> {
        let outcome = self.sink.put(buf);
        self.total += outcome.accepted;
        let written = written + outcome.accepted;

        let failure = match outcome.error {
            Some(err) => Some(err),
            None if outcome.accepted < buf.len() => Some(io::ErrorKind::WriteZero.into()),
            None => None,
        };
        match failure {
            Some(err) => {
                log::debug!("sink failed after {} of {} bytes: {}", outcome.accepted, buf.len(), err);
                let err = XdrError::sink(written, err);
                self.error = Some(err.clone());
                Err(err)
            }
            None => Ok(written),
        }
    }

    fn dump(&self, bs: &[u8]) {
        if !log::log_enabled!(log::Level::Debug) {
            return;
        }
        log::debug!("{}", dump_line(bs, self.max_debug_bytes));
    }
}

fn length_prefix(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| XdrError::TooLong(len))
}

/// Hex of at most `max` leading bytes of `bs`, marked with `...` when cut short.
fn dump_line(bs: &[u8], max: usize) -> String {
    if bs.len() > max {
        format!("wr bytes ({}): {}...", bs.len(), hex::encode(&bs[..max]))
    } else {
        format!("wr bytes ({}): {}", bs.len(), hex::encode(bs))
    }
}
