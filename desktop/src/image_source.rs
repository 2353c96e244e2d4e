use std::path::Path;

use embedded_graphics::prelude::{OriginDimensions, Size};
use image::{DynamicImage, RgbaImage};
use log::info;
use picosprite_core::{Pixel, PixelSource};

/// Any image the `image` crate can decode, converted to 8-bit RGBA.
pub struct ImageSource {
    image: RgbaImage,
}

impl ImageSource {
    pub fn open(path: &Path) -> Result<Self, image::ImageError> {
        let image = image::ImageReader::open(path)?
            .with_guessed_format()?
            .decode()?;
        let source = Self::from_image(image);
        info!(
            "Loaded image file with width {} and height {}",
            source.image.width(),
            source.image.height()
        );
        Ok(source)
    }

    pub fn from_image(image: DynamicImage) -> Self {
        Self {
            image: image.into_rgba8(),
        }
    }
}

impl OriginDimensions for ImageSource {
    fn size(&self) -> Size {
        Size::new(self.image.width(), self.image.height())
    }
}

impl PixelSource for ImageSource {
    fn pixel(&self, x: u32, y: u32) -> Pixel {
        Pixel::from(self.image.get_pixel(x, y).0)
    }
}
