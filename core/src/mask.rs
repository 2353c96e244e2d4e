use crate::{Pixel, Result, ValueSink};

/// 1 unless the pixel is fully transparent.
pub fn mask_bit(pixel: Pixel) -> bool {
    !pixel.is_transparent()
}

/// What happens to bits that do not fill a whole byte at the end of the mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingBits {
    /// Drop them; the array holds `floor(bits / 8)` bytes
    #[default]
    Truncate,
    /// Emit one more byte with the unused low bits cleared
    Pad,
}

impl TrailingBits {
    pub fn byte_count(self, bits: u64) -> u64 {
        match self {
            TrailingBits::Truncate => bits / 8,
            TrailingBits::Pad => bits.div_ceil(8),
        }
    }
}

/// Packs mask bits MSB first into bytes and forwards them to `S`.
///
/// The first bit pushed becomes bit 7 of the first byte, which is the order
/// the firmware walks with `0b1000_0000 >> bit`.
pub struct MaskEncoder<S> {
    sink: S,
    trailing: TrailingBits,
    byte: u8,
    filled: u8,
}

impl<S: ValueSink<u8>> MaskEncoder<S> {
    pub fn new(sink: S, trailing: TrailingBits) -> Self {
        Self {
            sink,
            trailing,
            byte: 0,
            filled: 0,
        }
    }

    pub fn into_inner(self) -> S {
        self.sink
    }
}

impl<S: ValueSink<u8>> ValueSink<bool> for MaskEncoder<S> {
    fn push(&mut self, bit: bool) -> Result<()> {
        self.byte |= (bit as u8) << (7 - self.filled);
        self.filled += 1;
        if self.filled == 8 {
            self.sink.push(self.byte)?;
            self.byte = 0;
            self.filled = 0;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.filled > 0 {
            if self.trailing == TrailingBits::Pad {
                self.sink.push(self.byte)?;
            } else {
                log::debug!("dropping {} trailing mask bits", self.filled);
            }
            self.byte = 0;
            self.filled = 0;
        }
        self.sink.finish()
    }
}
