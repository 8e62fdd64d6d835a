//! PNG serialization for rendered cards.
//!
//! The service path encodes in memory and hands the bytes straight to the
//! boundary; the CLI path writes to a file. Neither leaves transient state
//! behind on failure.

use std::io::Cursor;
use std::path::Path;

use image::ImageFormat;

use crate::error::{Result, StampError};
use crate::types::Raster;

/// Mime type of encoded card images.
pub const PNG_MIME: &str = "image/png";

/// Encoded image bytes plus their mime type.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    pub bytes: Vec<u8>,
    pub mime: &'static str,
}

impl EncodedImage {
    /// Size of the encoded payload in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Encode a rendered card into PNG bytes.
///
/// The working buffer is scoped to this call and released on every exit
/// path, including encoding failure; nothing touches the filesystem.
pub fn encode_png(raster: &Raster) -> Result<EncodedImage> {
    let img = raster.to_rgb8()?;

    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, ImageFormat::Png)
        .map_err(|e| StampError::EncodingFailure {
            message: e.to_string(),
        })?;

    Ok(EncodedImage {
        bytes: buffer.into_inner(),
        mime: PNG_MIME,
    })
}

/// Write a rendered card to a PNG file.
pub fn write_png(raster: &Raster, path: &Path) -> Result<()> {
    let img = raster.to_rgb8()?;

    img.save(path).map_err(|e| StampError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_encode_png_round_trips() {
        let mut raster = Raster::filled(3, 2, [40.0, 80.0, 120.0]);
        raster.set_pixel(2, 1, [255.0, 0.0, 0.0]);

        let encoded = encode_png(&raster).unwrap();
        assert_eq!(encoded.mime, "image/png");
        assert!(!encoded.is_empty());

        let img = image::load_from_memory(&encoded.bytes).unwrap().to_rgb8();
        assert_eq!(img.width(), 3);
        assert_eq!(img.height(), 2);
        assert_eq!(img.get_pixel(0, 0).0, [40, 80, 120]);
        assert_eq!(img.get_pixel(2, 1).0, [255, 0, 0]);
    }

    #[test]
    fn test_encode_png_signature() {
        let raster = Raster::new(1, 1);
        let encoded = encode_png(&raster).unwrap();
        assert_eq!(&encoded.bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_write_png() {
        let raster = Raster::filled(2, 2, [0.0, 255.0, 0.0]);

        let dir = tempdir().unwrap();
        let path = dir.path().join("card.png");

        write_png(&raster, &path).unwrap();

        assert!(path.exists());
        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.get_pixel(1, 1).0, [0, 255, 0]);
    }

    #[test]
    fn test_write_png_bad_directory_is_io_error() {
        let raster = Raster::new(1, 1);
        let path = Path::new("/nonexistent/dir/card.png");

        let err = write_png(&raster, path).unwrap_err();
        assert!(matches!(err, StampError::Io { .. }));
    }
}
