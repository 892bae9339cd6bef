//! Output image formats and CPU-side frame buffers.

use std::fmt;
use std::io::Cursor;

use image::{DynamicImage, RgbImage};
use serde::{Deserialize, Serialize};

/// Container format for captured frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageFormat {
    /// JPEG, lossy.
    Jpg,
    /// PNG, lossless.
    Png,
    /// OpenEXR, 32-bit float channels.
    Exr,
}

impl ImageFormat {
    /// Filename extension, uppercase with a leading dot (`".PNG"`).
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Jpg => ".JPG",
            Self::Png => ".PNG",
            Self::Exr => ".EXR",
        }
    }

    /// Encode an RGB frame into this container format in memory.
    ///
    /// Returns `None` when the buffer's dimensions don't match its pixel
    /// data or the codec rejects the frame.
    pub fn encode(&self, frame: &FrameBuffer) -> Option<Vec<u8>> {
        let image = RgbImage::from_raw(frame.width, frame.height, frame.data.clone())?;
        let mut out = Cursor::new(Vec::new());
        let encoded = match self {
            Self::Jpg => image.write_to(&mut out, image::ImageFormat::Jpeg),
            Self::Png => image.write_to(&mut out, image::ImageFormat::Png),
            // The EXR codec is float-only; widen before encoding.
            Self::Exr => DynamicImage::ImageRgb8(image)
                .to_rgb32f()
                .write_to(&mut out, image::ImageFormat::OpenExr),
        };
        encoded.ok()?;
        Some(out.into_inner())
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jpg => write!(f, "JPG"),
            Self::Png => write!(f, "PNG"),
            Self::Exr => write!(f, "EXR"),
        }
    }
}

/// Pixels read back from a render surface. Tightly packed RGB8, row-major,
/// top-left origin.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// `width * height * 3` bytes of RGB data.
    pub data: Vec<u8>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// A solid-color frame, mostly useful for tests and warm-up captures.
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let mut data = Vec::with_capacity((width * height * 3) as usize);
        for _ in 0..width * height {
            data.extend_from_slice(&rgb);
        }
        Self {
            width,
            height,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn png_round_trips_dimensions() {
        let frame = FrameBuffer::filled(8, 6, [10, 200, 30]);
        let bytes = ImageFormat::Png.encode(&frame).expect("png encode");
        let decoded = image::load_from_memory(&bytes).expect("png decode");
        assert_eq!(decoded.width(), 8);
        assert_eq!(decoded.height(), 6);
    }

    #[test]
    fn jpg_and_exr_produce_bytes() {
        let frame = FrameBuffer::filled(16, 16, [128, 128, 128]);
        assert!(!ImageFormat::Jpg.encode(&frame).expect("jpg").is_empty());
        assert!(!ImageFormat::Exr.encode(&frame).expect("exr").is_empty());
    }

    #[test]
    fn mismatched_buffer_fails_to_encode() {
        let frame = FrameBuffer::new(8, 8, vec![0; 10]);
        assert!(ImageFormat::Png.encode(&frame).is_none());
    }

    #[test]
    fn extensions_are_uppercase_with_dot() {
        assert_eq!(ImageFormat::Jpg.extension(), ".JPG");
        assert_eq!(ImageFormat::Png.extension(), ".PNG");
        assert_eq!(ImageFormat::Exr.extension(), ".EXR");
    }
}
