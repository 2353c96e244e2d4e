use core::marker::PhantomData;

use crate::{Error, PackedValue, Result, ValueSink};

/// Writes values as raw little-endian bytes, no header.
///
/// Meant for blobs pulled in with `include_bytes!` or loaded from flash.
pub struct BinaryEncoder<W, T> {
    writer: W,
    declared: u64,
    written: u64,
    _value: PhantomData<T>,
}

impl<W: embedded_io::Write, T: PackedValue> BinaryEncoder<W, T> {
    pub fn new(writer: W, count: u64) -> Self {
        Self {
            writer,
            declared: count,
            written: 0,
            _value: PhantomData,
        }
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: embedded_io::Write, T: PackedValue> ValueSink<T> for BinaryEncoder<W, T> {
    fn push(&mut self, value: T) -> Result<()> {
        value.write_le(&mut self.writer)?;
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.written != self.declared {
            return Err(Error::CountMismatch {
                declared: self.declared,
                written: self.written,
            });
        }
        self.writer.flush().map_err(Error::from_io_error)
    }
}
