use alloc::vec::Vec;
use embedded_graphics::prelude::{OriginDimensions, Size};

use crate::{Error, Result};

/// One RGBA pixel, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn is_transparent(&self) -> bool {
        self.a == 0
    }
}

impl From<[u8; 4]> for Pixel {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

/// Random access to a decoded image.
///
/// Origin is top-left, `x` is the column and `y` the row. Implementors only
/// need `pixel`; [`PixelSource::pixels`] walks the grid in scan order.
pub trait PixelSource: OriginDimensions {
    fn pixel(&self, x: u32, y: u32) -> Pixel;

    fn pixel_count(&self) -> u64 {
        let size = self.size();
        size.width as u64 * size.height as u64
    }

    /// Row-major iterator: row 0 left to right, then row 1, ...
    fn pixels(&self) -> Pixels<'_, Self>
    where
        Self: Sized,
    {
        Pixels {
            source: self,
            size: self.size(),
            x: 0,
            y: 0,
        }
    }
}

pub struct Pixels<'a, S> {
    source: &'a S,
    size: Size,
    x: u32,
    y: u32,
}

impl<S: PixelSource> Iterator for Pixels<'_, S> {
    type Item = Pixel;

    fn next(&mut self) -> Option<Pixel> {
        if self.size.width == 0 || self.y >= self.size.height {
            return None;
        }
        let pixel = self.source.pixel(self.x, self.y);
        self.x += 1;
        if self.x == self.size.width {
            self.x = 0;
            self.y += 1;
        }
        Some(pixel)
    }
}

/// Owned, already decoded pixel data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    size: Size,
    pixels: Vec<Pixel>,
}

impl PixelGrid {
    pub fn new(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<Self> {
        if pixels.len() as u64 != width as u64 * height as u64 {
            return Err(Error::InvalidDimensions);
        }
        Ok(Self {
            size: Size::new(width, height),
            pixels,
        })
    }

    /// Builds a grid from tightly packed RGBA bytes.
    pub fn from_rgba(width: u32, height: u32, data: &[u8]) -> Result<Self> {
        if data.len() % 4 != 0 {
            return Err(Error::InvalidDimensions);
        }
        let pixels = data
            .chunks_exact(4)
            .map(|px| Pixel::new(px[0], px[1], px[2], px[3]))
            .collect();
        Self::new(width, height, pixels)
    }
}

impl OriginDimensions for PixelGrid {
    fn size(&self) -> Size {
        self.size
    }
}

impl PixelSource for PixelGrid {
    fn pixel(&self, x: u32, y: u32) -> Pixel {
        self.pixels[y as usize * self.size.width as usize + x as usize]
    }
}
