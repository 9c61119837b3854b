//! In-memory 8-bit pixel grid.

use image::{ColorType, DynamicImage, GrayAlphaImage, GrayImage, RgbImage, RgbaImage};

use crate::{ImageError, Result};

/// A decoded image: `height x width x channels` samples, 8 bits each.
///
/// Dimensions are always positive. The buffer is immutable once built;
/// transformations such as [`crate::resize`] produce a new buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    image: DynamicImage,
}

impl ImageBuffer {
    /// Build a buffer from raw interleaved samples.
    ///
    /// `channels` must be 1 (gray), 2 (gray + alpha), 3 (RGB) or 4 (RGBA), and
    /// `data.len()` must equal `width * height * channels`.
    pub fn from_raw(width: u32, height: u32, channels: u8, data: Vec<u8>) -> Result<Self> {
        check_dimensions(width, height)?;

        let expected = u64::from(width) * u64::from(height) * u64::from(channels);
        if data.len() as u64 != expected {
            return Err(ImageError::InvalidBuffer(format!(
                "expected {expected} bytes for {width}x{height}x{channels}, got {}",
                data.len()
            )));
        }

        let image = match channels {
            1 => GrayImage::from_raw(width, height, data).map(DynamicImage::ImageLuma8),
            2 => GrayAlphaImage::from_raw(width, height, data).map(DynamicImage::ImageLumaA8),
            3 => RgbImage::from_raw(width, height, data).map(DynamicImage::ImageRgb8),
            4 => RgbaImage::from_raw(width, height, data).map(DynamicImage::ImageRgba8),
            n => {
                return Err(ImageError::InvalidBuffer(format!(
                    "unsupported channel count {n}"
                )));
            }
        };

        image
            .map(|image| Self { image })
            .ok_or_else(|| ImageError::InvalidBuffer("sample buffer too small".into()))
    }

    /// Wrap a decoded image, narrowing any wider sample type to 8 bits.
    pub fn from_dynamic(image: DynamicImage) -> Result<Self> {
        check_dimensions(image.width(), image.height())?;

        let image = match image.color() {
            ColorType::L8 | ColorType::La8 | ColorType::Rgb8 | ColorType::Rgba8 => image,
            ColorType::L16 => DynamicImage::ImageLuma8(image.to_luma8()),
            ColorType::La16 => DynamicImage::ImageLumaA8(image.to_luma_alpha8()),
            ColorType::Rgb16 | ColorType::Rgb32F => DynamicImage::ImageRgb8(image.to_rgb8()),
            _ => DynamicImage::ImageRgba8(image.to_rgba8()),
        };

        Ok(Self { image })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    /// Samples per pixel (1-4).
    pub fn channels(&self) -> u8 {
        self.image.color().channel_count()
    }

    /// Interleaved samples in row-major order.
    pub fn as_bytes(&self) -> &[u8] {
        self.image.as_bytes()
    }

    /// Borrow the underlying `image` representation.
    pub fn as_dynamic(&self) -> &DynamicImage {
        &self.image
    }

    /// Packed RGB copy, used by display backends that only accept RGB24.
    pub fn to_rgb8(&self) -> RgbImage {
        self.image.to_rgb8()
    }
}

fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(ImageError::InvalidBuffer(format!(
            "dimensions must be positive, got {width}x{height}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer as RawBuffer, Rgb};

    #[test]
    fn test_from_raw_rgb() {
        let buf = ImageBuffer::from_raw(4, 2, 3, vec![7; 24]).unwrap();
        assert_eq!(buf.dimensions(), (4, 2));
        assert_eq!(buf.channels(), 3);
        assert_eq!(buf.as_bytes().len(), 24);
    }

    #[test]
    fn test_from_raw_all_channel_counts() {
        for channels in 1..=4u8 {
            let data = vec![0; 3 * 3 * usize::from(channels)];
            let buf = ImageBuffer::from_raw(3, 3, channels, data).unwrap();
            assert_eq!(buf.channels(), channels);
        }
    }

    #[test]
    fn test_from_raw_rejects_zero_dimensions() {
        assert!(matches!(
            ImageBuffer::from_raw(0, 5, 3, vec![]),
            Err(ImageError::InvalidBuffer(_))
        ));
        assert!(matches!(
            ImageBuffer::from_raw(5, 0, 1, vec![]),
            Err(ImageError::InvalidBuffer(_))
        ));
    }

    #[test]
    fn test_from_raw_rejects_length_mismatch() {
        let err = ImageBuffer::from_raw(2, 2, 3, vec![0; 11]).unwrap_err();
        assert!(err.to_string().contains("expected 12 bytes"));

        // Longer buffers are rejected too, not silently truncated
        assert!(ImageBuffer::from_raw(2, 2, 3, vec![0; 13]).is_err());
    }

    #[test]
    fn test_from_raw_rejects_unsupported_channels() {
        let err = ImageBuffer::from_raw(1, 1, 5, vec![0; 5]).unwrap_err();
        assert!(err.to_string().contains("unsupported channel count 5"));
    }

    #[test]
    fn test_from_dynamic_narrows_16_bit() {
        let wide: RawBuffer<Rgb<u16>, Vec<u16>> = RawBuffer::from_pixel(2, 2, Rgb([65535, 0, 0]));
        let buf = ImageBuffer::from_dynamic(DynamicImage::ImageRgb16(wide)).unwrap();
        assert_eq!(buf.channels(), 3);
        assert_eq!(&buf.as_bytes()[..3], &[255, 0, 0]);
    }

    #[test]
    fn test_to_rgb8_expands_gray() {
        let buf = ImageBuffer::from_raw(1, 1, 1, vec![42]).unwrap();
        let rgb = buf.to_rgb8();
        assert_eq!(rgb.get_pixel(0, 0).0, [42, 42, 42]);
    }
}
