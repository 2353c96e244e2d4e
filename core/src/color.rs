use crate::{
    Pixel, Result,
    layout::{ColorLayout, quantize},
};

/// Packs pixels into 16-bit color words according to a [`ColorLayout`].
#[derive(Debug, Clone, Copy)]
pub struct ColorPacker {
    layout: ColorLayout,
}

impl ColorPacker {
    pub fn new(layout: ColorLayout) -> Result<Self> {
        layout.validate()?;
        Ok(Self { layout })
    }

    pub fn layout(&self) -> &ColorLayout {
        &self.layout
    }

    pub fn pack(&self, pixel: Pixel) -> u16 {
        self.layout.fields.iter().fold(0u16, |word, field| {
            let q = quantize(field.channel.of(pixel), field.bits) as u16;
            word | (q << field.shift)
        })
    }

    /// Places already quantized channel values without rounding.
    pub fn pack_nibbles(&self, r: u8, g: u8, b: u8, a: u8) -> u16 {
        let values = Pixel::new(r, g, b, a);
        self.layout.fields.iter().fold(0u16, |word, field| {
            let max = (1u16 << field.bits) - 1;
            word | ((field.channel.of(values) as u16 & max) << field.shift)
        })
    }
}

impl Default for ColorPacker {
    fn default() -> Self {
        Self {
            layout: ColorLayout::PICOSYSTEM,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Channel, Error, Field};

    #[test]
    fn field_order() {
        let packer = ColorPacker::default();
        assert_eq!(packer.pack_nibbles(0x1, 0x2, 0x3, 0x4), 0x2341);
    }

    #[test]
    fn pack_quantizes_each_channel() {
        let packer = ColorPacker::default();
        assert_eq!(packer.pack(Pixel::new(255, 255, 255, 255)), 0xffff);
        assert_eq!(packer.pack(Pixel::new(0, 0, 0, 0)), 0x0000);
        // r=16 -> 1, g=17 -> 2, b=48 -> 3, a=49 -> 4
        assert_eq!(packer.pack(Pixel::new(16, 17, 48, 49)), 0x2341);
        assert_eq!(packer.pack(Pixel::new(255, 0, 0, 255)), 0x00ff);
        assert_eq!(packer.pack(Pixel::new(0, 1, 0, 0)), 0x1000);
    }

    #[test]
    fn custom_layout() {
        let argb = ColorLayout {
            fields: [
                Field::new(Channel::Alpha, 12, 4),
                Field::new(Channel::Red, 8, 4),
                Field::new(Channel::Green, 4, 4),
                Field::new(Channel::Blue, 0, 4),
            ],
        };
        let packer = ColorPacker::new(argb).unwrap();
        assert_eq!(packer.pack_nibbles(0x1, 0x2, 0x3, 0x4), 0x4123);
    }

    #[test]
    fn rejects_invalid_layout() {
        let mut layout = ColorLayout::PICOSYSTEM;
        layout.fields[0].bits = 9;
        assert_eq!(ColorPacker::new(layout).unwrap_err(), Error::InvalidLayout);
    }
}
