//! PNG and JPEG export of the finished collage

use crate::io::configuration::JPEG_QUALITY;
use crate::io::error::{CollageError, Result};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, RgbaImage};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Encoders the collage can be written with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Lossless PNG with alpha
    Png,
    /// Lossy JPEG at [`JPEG_QUALITY`], alpha dropped
    Jpeg,
}

impl OutputFormat {
    /// Pick the encoder from the path's extension (case-insensitive)
    ///
    /// # Errors
    ///
    /// Returns [`CollageError::UnsupportedFormat`] for anything other than
    /// `png`, `jpg` or `jpeg`
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            _ => Err(CollageError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }
}

/// Write the canvas to `output_path` with the given encoder
///
/// A partially written file is removed if encoding fails.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The output file cannot be created or flushed
/// - The encoder rejects the image
pub fn save_collage(canvas: &RgbaImage, output_path: &Path, format: OutputFormat) -> Result<()> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| CollageError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let file = File::create(output_path).map_err(|e| CollageError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "create file",
        source: e,
    })?;
    let mut writer = BufWriter::new(file);

    let encoded = match format {
        OutputFormat::Png => canvas.write_with_encoder(PngEncoder::new(&mut writer)),
        OutputFormat::Jpeg => {
            let rgb = DynamicImage::ImageRgba8(canvas.clone()).to_rgb8();
            rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY))
        }
    };

    let result = encoded
        .map_err(|e| CollageError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
        .and_then(|()| {
            writer.flush().map_err(|e| CollageError::FileSystem {
                path: output_path.to_path_buf(),
                operation: "write file",
                source: e,
            })
        });

    if result.is_err() {
        drop(writer);
        std::fs::remove_file(output_path).ok();
    }

    result
}
