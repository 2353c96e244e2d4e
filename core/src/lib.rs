/*!
Packers and literal emitters that turn RGBA pixel grids into PicoSystem
sprite data.

Two pipelines share the same emitters:
- [`encode_color`]: one 16-bit word per pixel, 4 bits per channel
- [`encode_mask`]: one bit per pixel, set when the pixel is not fully transparent

Both stream their output through [`embedded_io::Write`], so nothing but the
current line position (and for masks, the partial byte) is held in memory.

## Usage
```
# use picosprite_core as sprite;
# fn main() -> Result<(), sprite::Error> {
let grid = sprite::PixelGrid::new(2, 1, vec![sprite::Pixel::new(255, 255, 255, 255); 2])?;
let name = sprite::Identifier::new("test")?;
let mut out = Vec::<u8>::new();
sprite::encode_color(&grid, &name, &sprite::ColorOptions::default(), &mut out)?;
assert!(out.starts_with(b"const picosystem::color_t test_data[2] = {\n0xffff, 0xffff, "));
# Ok(())
# }
```
*/

#![no_std]

extern crate alloc;

pub mod binary;
pub mod color;
mod error;
pub mod ident;
pub mod layout;
pub mod literal;
pub mod mask;
pub mod pipeline;
pub mod pixel;


pub use binary::BinaryEncoder;
pub use color::ColorPacker;
pub use error::{Error, Result};
pub use ident::Identifier;
pub use layout::{Channel, ColorLayout, Field};
pub use literal::{ArrayDecl, LiteralEncoder, COLOR_VALUES_PER_LINE, MASK_VALUES_PER_LINE};
pub use mask::{MaskEncoder, TrailingBits, mask_bit};
pub use pipeline::{encode_color, encode_mask, ColorOptions, MaskOptions, OutputKind};
pub use pixel::{Pixel, PixelGrid, PixelSource};

/// A packed element that can be emitted as hex text or raw little-endian bytes.
pub trait PackedValue: Copy + core::fmt::LowerHex {
    /// Zero-padded hex digits in the text literal
    const HEX_DIGITS: usize;

    fn write_le<W: embedded_io::Write>(self, writer: &mut W) -> Result<()>;
}

impl PackedValue for u8 {
    const HEX_DIGITS: usize = 2;

    fn write_le<W: embedded_io::Write>(self, writer: &mut W) -> Result<()> {
        writer.write_all(&[self]).map_err(Error::from_io_error)
    }
}

impl PackedValue for u16 {
    const HEX_DIGITS: usize = 4;

    fn write_le<W: embedded_io::Write>(self, writer: &mut W) -> Result<()> {
        writer.write_all(&self.to_le_bytes()).map_err(Error::from_io_error)
    }
}

/// Receives packed values one at a time, in pixel order.
pub trait ValueSink<T> {
    fn push(&mut self, value: T) -> Result<()>;

    /// Closes the output. Must be called exactly once after the last value.
    fn finish(&mut self) -> Result<()>;
}
