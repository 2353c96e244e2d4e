use strum::IntoEnumIterator;

use crate::{Error, Pixel, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::EnumIter)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl Channel {
    pub fn of(self, pixel: Pixel) -> u8 {
        match self {
            Channel::Red => pixel.r,
            Channel::Green => pixel.g,
            Channel::Blue => pixel.b,
            Channel::Alpha => pixel.a,
        }
    }
}

/// Placement of one quantized channel inside the packed word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub channel: Channel,
    /// Bit position of the field's least significant bit
    pub shift: u8,
    /// Field width, 1..=8
    pub bits: u8,
}

impl Field {
    pub const fn new(channel: Channel, shift: u8, bits: u8) -> Self {
        Self { channel, shift, bits }
    }

    fn mask(&self) -> u32 {
        ((1u32 << self.bits) - 1) << self.shift
    }
}

/// Where each channel lands in a 16-bit color word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorLayout {
    pub fields: [Field; 4],
}

impl ColorLayout {
    /// `picosystem::color_t`: GGGG BBBB AAAA RRRR
    pub const PICOSYSTEM: ColorLayout = ColorLayout {
        fields: [
            Field::new(Channel::Green, 12, 4),
            Field::new(Channel::Blue, 8, 4),
            Field::new(Channel::Alpha, 4, 4),
            Field::new(Channel::Red, 0, 4),
        ],
    };

    pub fn validate(&self) -> Result<()> {
        for channel in Channel::iter() {
            if self.fields.iter().filter(|f| f.channel == channel).count() != 1 {
                return Err(Error::InvalidLayout);
            }
        }
        let mut used = 0u32;
        for field in &self.fields {
            if field.bits == 0 || field.bits > 8 || field.shift as u32 + field.bits as u32 > 16 {
                return Err(Error::InvalidLayout);
            }
            if used & field.mask() != 0 {
                return Err(Error::InvalidLayout);
            }
            used |= field.mask();
        }
        Ok(())
    }
}

impl Default for ColorLayout {
    fn default() -> Self {
        Self::PICOSYSTEM
    }
}

/// Reduces an 8-bit channel value to `bits` bits, rounding up.
///
/// `min(2^bits - 1, ceil(value / 2^(8 - bits)))`, so for 4 bits 0 stays 0,
/// 1..=16 become 1 and 241..=255 clamp to 15.
pub fn quantize(value: u8, bits: u8) -> u8 {
    debug_assert!((1..=8).contains(&bits));
    let step = 1u16 << (8 - bits);
    let max = (1u16 << bits) - 1;
    (value as u16).div_ceil(step).min(max) as u8
}
