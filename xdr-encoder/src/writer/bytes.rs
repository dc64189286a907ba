use crate::{error::Result, Encoder};

use super::{padded_len, Encode, Sink};

impl Encode for [u8] {
    fn encoded_len(&self) -> usize {
        // length prefix + payload + padding
        4 + padded_len(self.len())
    }

    fn write_to<S: Sink + ?Sized>(&self, enc: &mut Encoder<S>) -> Result<usize> {
        enc.write_bytes(self)
    }
}

impl Encode for Vec<u8> {
    fn encoded_len(&self) -> usize {
        self.as_slice().encoded_len()
    }

    fn write_to<S: Sink + ?Sized>(&self, enc: &mut Encoder<S>) -> Result<usize> {
        enc.write_bytes(self)
    }
}

impl Encode for str {
    fn encoded_len(&self) -> usize {
        self.as_bytes().encoded_len()
    }

    fn write_to<S: Sink + ?Sized>(&self, enc: &mut Encoder<S>) -> Result<usize> {
        enc.write_str(self)
    }
}

impl Encode for String {
    fn encoded_len(&self) -> usize {
        self.as_str().encoded_len()
    }

    fn write_to<S: Sink + ?Sized>(&self, enc: &mut Encoder<S>) -> Result<usize> {
        enc.write_str(self)
    }
}
