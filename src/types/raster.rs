//! Raster type backing card templates.
//!
//! A raster is a fixed-width by fixed-height grid of per-pixel channel
//! intensities in the 0..=255 range, stored row-major as `f32` so that
//! repeated blends accumulate without intermediate quantization. Pixels
//! only round back to 8-bit at encode time.

use image::RgbImage;

use crate::error::{Result, StampError};

/// Channels per raster pixel (RGB).
pub const CHANNELS: usize = 3;

/// A fixed-size grid of per-pixel channel intensities.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    width: u32,
    height: u32,
    data: Vec<f32>,
}

impl Raster {
    /// Create a raster filled with zeroes (black).
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * CHANNELS;
        Self {
            width,
            height,
            data: vec![0.0; len],
        }
    }

    /// Create a raster filled with a single pixel value.
    pub fn filled(width: u32, height: u32, pixel: [f32; CHANNELS]) -> Self {
        let mut raster = Self::new(width, height);
        for chunk in raster.data.chunks_exact_mut(CHANNELS) {
            chunk.copy_from_slice(&pixel);
        }
        raster
    }

    /// Convert an 8-bit RGB image into a raster.
    pub fn from_rgb8(img: &RgbImage) -> Self {
        Self {
            width: img.width(),
            height: img.height(),
            data: img.as_raw().iter().map(|&v| f32::from(v)).collect(),
        }
    }

    /// Get the width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get a pixel's channel values.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> [f32; CHANNELS] {
        let i = self.index(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Overwrite a pixel's channel values.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the raster.
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: [f32; CHANNELS]) {
        let i = self.index(x, y);
        self.data[i..i + CHANNELS].copy_from_slice(&pixel);
    }

    /// Check whether a `w` by `h` window placed at `(dx, dy)` lies fully
    /// inside the raster. Negative offsets never fit.
    pub fn contains_window(&self, dx: i64, dy: i64, w: u32, h: u32) -> bool {
        dx >= 0
            && dy >= 0
            && dx + i64::from(w) <= i64::from(self.width)
            && dy + i64::from(h) <= i64::from(self.height)
    }

    /// Mutable access to one row's channel data.
    pub(crate) fn row_mut(&mut self, y: u32) -> &mut [f32] {
        let stride = self.width as usize * CHANNELS;
        let start = y as usize * stride;
        &mut self.data[start..start + stride]
    }

    /// Read access to one row's channel data.
    pub(crate) fn row(&self, y: u32) -> &[f32] {
        let stride = self.width as usize * CHANNELS;
        let start = y as usize * stride;
        &self.data[start..start + stride]
    }

    /// Quantize back to an 8-bit RGB image, clamping each channel to 0..=255.
    pub fn to_rgb8(&self) -> Result<RgbImage> {
        let bytes: Vec<u8> = self
            .data
            .iter()
            .map(|&v| v.round().clamp(0.0, 255.0) as u8)
            .collect();

        RgbImage::from_raw(self.width, self.height, bytes).ok_or_else(|| {
            StampError::EncodingFailure {
                message: format!(
                    "channel buffer does not match {}x{} dimensions",
                    self.width, self.height
                ),
            }
        })
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(x < self.width && y < self.height, "pixel out of range");
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_black() {
        let r = Raster::new(4, 2);
        assert_eq!(r.size(), (4, 2));
        assert_eq!(r.pixel(3, 1), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_set_and_get_pixel() {
        let mut r = Raster::new(3, 3);
        r.set_pixel(1, 2, [10.0, 20.0, 30.0]);
        assert_eq!(r.pixel(1, 2), [10.0, 20.0, 30.0]);
        assert_eq!(r.pixel(0, 0), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_from_rgb8_round_trip() {
        let mut img = RgbImage::new(2, 2);
        img.put_pixel(0, 0, image::Rgb([1, 2, 3]));
        img.put_pixel(1, 1, image::Rgb([250, 251, 252]));

        let raster = Raster::from_rgb8(&img);
        assert_eq!(raster.pixel(0, 0), [1.0, 2.0, 3.0]);
        assert_eq!(raster.pixel(1, 1), [250.0, 251.0, 252.0]);

        let back = raster.to_rgb8().unwrap();
        assert_eq!(back.get_pixel(0, 0).0, [1, 2, 3]);
        assert_eq!(back.get_pixel(1, 1).0, [250, 251, 252]);
    }

    #[test]
    fn test_to_rgb8_clamps_out_of_range() {
        let mut r = Raster::new(1, 1);
        r.set_pixel(0, 0, [-5.0, 300.0, 128.4]);
        let img = r.to_rgb8().unwrap();
        assert_eq!(img.get_pixel(0, 0).0, [0, 255, 128]);
    }

    #[test]
    fn test_contains_window() {
        let r = Raster::new(800, 600);
        assert!(r.contains_window(0, 0, 64, 64));
        assert!(r.contains_window(700, 500, 64, 64));
        assert!(r.contains_window(736, 536, 64, 64));
        assert!(!r.contains_window(737, 0, 64, 64));
        assert!(!r.contains_window(0, 537, 64, 64));
        assert!(!r.contains_window(-1, 0, 64, 64));
        assert!(!r.contains_window(0, -10, 64, 64));
    }

    #[test]
    fn test_filled() {
        let r = Raster::filled(2, 2, [7.0, 8.0, 9.0]);
        assert_eq!(r.pixel(0, 0), [7.0, 8.0, 9.0]);
        assert_eq!(r.pixel(1, 1), [7.0, 8.0, 9.0]);
    }

    #[test]
    #[should_panic(expected = "pixel out of range")]
    fn test_pixel_out_of_range_panics() {
        let r = Raster::new(2, 2);
        r.pixel(2, 0);
    }
}
