//! Sprite type - the shared overlay graphic.
//!
//! A sprite pairs an RGB raster with the alpha mask extracted from its
//! embedded alpha channel. The pair is immutable after construction and
//! independent of year/month, so one instance can be shared read-only
//! across requests.

use image::RgbaImage;

use super::{AlphaMask, Raster, CHANNELS};

/// The overlay graphic stamped onto card templates.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pixels: Raster,
    mask: AlphaMask,
}

impl Sprite {
    /// Pair a raster with a separately prepared mask.
    ///
    /// Returns `None` when the mask does not cover the sprite exactly.
    pub fn from_parts(pixels: Raster, mask: AlphaMask) -> Option<Self> {
        if pixels.size() != mask.size() {
            return None;
        }
        Some(Self { pixels, mask })
    }

    /// Split an RGBA image into colour raster and alpha mask.
    pub fn from_rgba8(img: &RgbaImage) -> Self {
        let (width, height) = (img.width(), img.height());

        let mut pixels = Raster::new(width, height);
        let mut alpha = Vec::with_capacity(width as usize * height as usize);

        for (y, row) in img.rows().enumerate() {
            let dest = pixels.row_mut(y as u32);
            for (x, rgba) in row.enumerate() {
                for c in 0..CHANNELS {
                    dest[x * CHANNELS + c] = f32::from(rgba.0[c]);
                }
                alpha.push(rgba.0[3]);
            }
        }

        Self {
            pixels,
            mask: AlphaMask::from_alpha8(width, height, &alpha),
        }
    }

    /// Get the colour raster.
    pub fn pixels(&self) -> &Raster {
        &self.pixels
    }

    /// Get the alpha mask.
    pub fn mask(&self) -> &AlphaMask {
        &self.mask
    }

    /// Get the width in pixels.
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Get the height in pixels.
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (u32, u32) {
        self.pixels.size()
    }
}
