//! Decoding of selected source images

use crate::io::error::{CollageError, Result};
use image::{ImageError, ImageReader, RgbaImage};
use std::path::Path;

/// A decoded source image paired with the name shown in its caption
#[derive(Debug, Clone)]
pub struct LoadedImage {
    /// Base file name of the source
    pub name: String,
    /// Decoded pixels
    pub image: RgbaImage,
}

impl LoadedImage {
    /// Pair an already decoded image with a display name
    pub fn new(name: impl Into<String>, image: RgbaImage) -> Self {
        Self {
            name: name.into(),
            image,
        }
    }
}

/// Decode one image, detecting the format from its content
///
/// # Errors
///
/// Returns [`CollageError::ImageLoad`] if the file cannot be opened, its
/// format is not recognized, or decoding fails
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let load_error = |source: ImageError| CollageError::ImageLoad {
        path: path.to_path_buf(),
        source,
    };

    let image = ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|e| load_error(ImageError::IoError(e)))?
        .decode()
        .map_err(load_error)?
        .to_rgba8();

    let name = path
        .file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned();

    tracing::debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "decoded image"
    );

    Ok(LoadedImage::new(name, image))
}

/// Decode `paths` in order, calling `on_loaded` after each image
///
/// The first failure aborts the whole batch.
///
/// # Errors
///
/// Returns the first [`CollageError::ImageLoad`] encountered
pub fn load_images<P: AsRef<Path>>(
    paths: &[P],
    mut on_loaded: impl FnMut(&LoadedImage),
) -> Result<Vec<LoadedImage>> {
    let mut images = Vec::with_capacity(paths.len());
    for path in paths {
        let loaded = load_image(path.as_ref())?;
        on_loaded(&loaded);
        images.push(loaded);
    }
    Ok(images)
}
