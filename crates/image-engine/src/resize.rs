//! Image resizing by scale factor.
//!
//! Output dimensions are `floor(width * scale_x)` by `floor(height * scale_y)`.
//! Bilinear (`Triangle`) filtering is the default interpolation.

use image::imageops::FilterType;
use tracing::debug;

use crate::{DEFAULT_SCALE, ImageBuffer, ImageError, Result};

/// Interpolation used by [`resize`].
pub const DEFAULT_FILTER: FilterType = FilterType::Triangle;

/// Compute the scaled dimensions without touching any pixels.
///
/// Fails on non-finite or non-positive factors, and when either axis would
/// collapse to zero pixels.
pub fn scaled_dimensions(width: u32, height: u32, scale_x: f64, scale_y: f64) -> Result<(u32, u32)> {
    let valid = |s: f64| s.is_finite() && s > 0.0;
    if !valid(scale_x) || !valid(scale_y) {
        return Err(ImageError::InvalidScale { scale_x, scale_y });
    }

    let new_width = (f64::from(width) * scale_x).floor();
    let new_height = (f64::from(height) * scale_y).floor();

    if new_width > f64::from(u32::MAX) || new_height > f64::from(u32::MAX) {
        return Err(ImageError::InvalidScale { scale_x, scale_y });
    }

    let (new_width, new_height) = (new_width as u32, new_height as u32);
    if new_width == 0 || new_height == 0 {
        return Err(ImageError::EmptyResult {
            width,
            height,
            scale_x,
            scale_y,
        });
    }

    Ok((new_width, new_height))
}

/// Resize by independent horizontal and vertical factors.
pub fn resize(img: &ImageBuffer, scale_x: f64, scale_y: f64) -> Result<ImageBuffer> {
    resize_with_filter(img, scale_x, scale_y, DEFAULT_FILTER)
}

/// Resize with an explicit interpolation filter.
///
/// Returns a copy of the input unchanged when the scaled dimensions match.
pub fn resize_with_filter(
    img: &ImageBuffer,
    scale_x: f64,
    scale_y: f64,
    filter: FilterType,
) -> Result<ImageBuffer> {
    let (orig_w, orig_h) = img.dimensions();
    let (new_width, new_height) = scaled_dimensions(orig_w, orig_h, scale_x, scale_y)?;

    if (new_width, new_height) == (orig_w, orig_h) {
        debug!(orig_w, orig_h, "Image already at target size, skipping resize");
        return Ok(img.clone());
    }

    debug!(
        orig_w,
        orig_h,
        new_width,
        new_height,
        ?filter,
        "Resizing image"
    );

    let resized = img.as_dynamic().resize_exact(new_width, new_height, filter);
    ImageBuffer::from_dynamic(resized)
}

/// Halve both dimensions.
pub fn half(img: &ImageBuffer) -> Result<ImageBuffer> {
    resize(img, DEFAULT_SCALE, DEFAULT_SCALE)
}
