//! Decoding image files from disk.

use std::io::ErrorKind;
use std::path::Path;

use image::{DynamicImage, ImageReader};
use tracing::debug;

use crate::{ImageBuffer, ImageError, Result};

/// Decode the image at `path` into a 3-channel RGB buffer.
///
/// The format is sniffed from the file contents, so a misleading extension
/// still decodes. Alpha is dropped and grayscale is expanded, the same way a
/// colour-mode read behaves in most imaging toolkits.
pub fn load(path: impl AsRef<Path>) -> Result<ImageBuffer> {
    let path = path.as_ref();

    let reader = ImageReader::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ImageError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ImageError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let reader = reader.with_guessed_format().map_err(|e| ImageError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let format = reader.format();
    let decoded = reader.decode().map_err(|e| ImageError::Decode {
        path: path.to_path_buf(),
        source: e,
    })?;

    debug!(
        path = %path.display(),
        ?format,
        width = decoded.width(),
        height = decoded.height(),
        color = ?decoded.color(),
        "Decoded image"
    );

    ImageBuffer::from_dynamic(DynamicImage::ImageRgb8(decoded.to_rgb8()))
}
