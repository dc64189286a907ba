use crate::{error::Result, Encoder};

use super::{Encode, Sink};

macro_rules! impl_encode_scalar {
    ($ty:ty, $len:expr, $write:ident) => {
        impl Encode for $ty {
            fn encoded_len(&self) -> usize {
                $len
            }

            fn write_to<S: Sink + ?Sized>(&self, enc: &mut Encoder<S>) -> Result<usize> {
                enc.$write(*self)
            }
        }
    };
}

// bool and u16 are widened to a full 4-byte word.
impl_encode_scalar!(bool, 4, write_bool);
impl_encode_scalar!(u16, 4, write_u16);
impl_encode_scalar!(u32, 4, write_u32);
impl_encode_scalar!(u64, 8, write_u64);
