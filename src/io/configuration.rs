//! Layout constants, runtime defaults and validated collage configuration

use crate::io::encoder::OutputFormat;
use crate::io::error::Result;
use crate::layout::grid::GridLayout;
use std::path::PathBuf;

// Fixed layout geometry in pixels
/// Spacing between tiles and around the canvas edge
pub const MARGIN: u32 = 10;
/// Vertical space reserved beneath each tile for its caption
pub const CAPTION_HEIGHT: u32 = 20;
/// Distance between the bottom of a tile and the top of its caption
pub const CAPTION_GAP: u32 = 5;

// JPEG cannot encode an edge longer than this
/// Largest canvas width or height accepted
pub const MAX_CANVAS_DIMENSION: u32 = 65_535;

/// File extensions accepted during discovery (compared case-insensitively)
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "bmp"];

/// Quality used for JPEG output
pub const JPEG_QUALITY: u8 = 90;

/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Default values for configurable parameters
/// Default number of images per row and column
pub const DEFAULT_GRID_SIZE: u32 = 3;
/// Default tile edge length in pixels
pub const DEFAULT_TILE_SIZE: u32 = 300;
/// Default output file name
pub const DEFAULT_OUTPUT: &str = "output.png";

/// Fully validated parameters for one collage run
#[derive(Debug, Clone)]
pub struct CollageConfig {
    /// Directory scanned for source images
    pub input_dir: PathBuf,
    /// Destination of the encoded collage
    pub output_path: PathBuf,
    /// Encoder selected from the output extension
    pub output_format: OutputFormat,
    /// Grid geometry
    pub layout: GridLayout,
    /// Fixed seed for reproducible sampling, if any
    pub seed: Option<u64>,
}

impl CollageConfig {
    /// Validate raw parameters and derive the layout and output format
    ///
    /// Nothing is read or written here, so a bad output extension is rejected
    /// before the input directory is even scanned.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `grid_size` or `tile_size` is zero
    /// - The resulting canvas would exceed `MAX_CANVAS_DIMENSION` on either side
    /// - The output extension is not `.png`, `.jpg` or `.jpeg`
    pub fn validate(
        input_dir: PathBuf,
        output_path: PathBuf,
        grid_size: u32,
        tile_size: u32,
        seed: Option<u64>,
    ) -> Result<Self> {
        let layout = GridLayout::new(grid_size, tile_size)?;
        let output_format = OutputFormat::from_path(&output_path)?;

        Ok(Self {
            input_dir,
            output_path,
            output_format,
            layout,
            seed,
        })
    }

    /// Number of images the collage needs
    pub const fn required_images(&self) -> usize {
        self.layout.cell_count()
    }
}
