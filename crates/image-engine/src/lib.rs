//! Image decoding and resampling for the viewer.
//!
//! Wraps the `image` crate behind an [`ImageBuffer`] that can never hold an
//! empty grid, so everything downstream may assume positive dimensions.

pub mod buffer;
pub mod load;
pub mod resize;

use std::path::PathBuf;

// Re-exports for convenience
pub use buffer::ImageBuffer;
pub use load::load;
pub use resize::{half, resize, resize_with_filter, scaled_dimensions};

/// Scale factor applied on both axes when no other is configured.
pub const DEFAULT_SCALE: f64 = 0.5;

/// Errors that can occur while loading or transforming images.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("Image file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Invalid scale factor ({scale_x}, {scale_y}): must be finite and positive")]
    InvalidScale { scale_x: f64, scale_y: f64 },

    #[error("Resizing {width}x{height} by ({scale_x}, {scale_y}) yields an empty image")]
    EmptyResult {
        width: u32,
        height: u32,
        scale_x: f64,
        scale_y: f64,
    },

    #[error("Invalid image buffer: {0}")]
    InvalidBuffer(String),
}

/// Result type alias for image-engine operations.
pub type Result<T> = std::result::Result<T, ImageError>;
