//! Grid geometry: canvas size, cell placement and aspect-preserving fit

use crate::io::configuration::{CAPTION_GAP, CAPTION_HEIGHT, MARGIN, MAX_CANVAS_DIMENSION};
use crate::io::error::{Result, invalid_parameter};

/// Placement rules for an N×N collage of square tiles with captions
///
/// Cells are filled in row-major order. Every cell is `tile_size` pixels square
/// with a caption band of [`CAPTION_HEIGHT`] beneath it, and [`MARGIN`] pixels
/// separate cells from each other and from the canvas edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    grid_size: u32,
    tile_size: u32,
    canvas_width: u32,
    canvas_height: u32,
}

impl GridLayout {
    /// Build a layout for `grid_size`×`grid_size` tiles of `tile_size` pixels
    ///
    /// # Errors
    ///
    /// Returns an error if either parameter is zero or the canvas would exceed
    /// [`MAX_CANVAS_DIMENSION`] on either axis
    pub fn new(grid_size: u32, tile_size: u32) -> Result<Self> {
        if grid_size == 0 {
            return Err(invalid_parameter("n", &grid_size, &"must be at least 1"));
        }
        if tile_size == 0 {
            return Err(invalid_parameter("tile", &tile_size, &"must be at least 1"));
        }

        let canvas_width = span(grid_size, tile_size);
        let canvas_height = tile_size
            .checked_add(CAPTION_HEIGHT)
            .and_then(|cell| span(grid_size, cell));

        match (canvas_width, canvas_height) {
            (Some(w), Some(h)) if w <= MAX_CANVAS_DIMENSION && h <= MAX_CANVAS_DIMENSION => {
                Ok(Self {
                    grid_size,
                    tile_size,
                    canvas_width: w,
                    canvas_height: h,
                })
            }
            _ => Err(invalid_parameter(
                "tile",
                &format!("{grid_size}x{tile_size}"),
                &format!("collage would exceed {MAX_CANVAS_DIMENSION} pixels per side"),
            )),
        }
    }

    /// Number of images per row and column
    pub const fn grid_size(&self) -> u32 {
        self.grid_size
    }

    /// Edge length of one tile in pixels
    pub const fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Total number of cells (N²)
    pub const fn cell_count(&self) -> usize {
        self.grid_size as usize * self.grid_size as usize
    }

    /// Canvas width: `N*tile + (N+1)*margin`
    pub const fn canvas_width(&self) -> u32 {
        self.canvas_width
    }

    /// Canvas height: `N*(tile+caption) + (N+1)*margin`
    pub const fn canvas_height(&self) -> u32 {
        self.canvas_height
    }

    /// Row and column of the cell holding image `index`
    pub const fn cell_position(&self, index: usize) -> (u32, u32) {
        let n = self.grid_size as usize;
        ((index / n) as u32, (index % n) as u32)
    }

    /// Top-left pixel of the tile area for image `index`
    pub const fn cell_origin(&self, index: usize) -> (u32, u32) {
        let (row, col) = self.cell_position(index);
        (
            MARGIN + col * (self.tile_size + MARGIN),
            MARGIN + row * (self.tile_size + CAPTION_HEIGHT + MARGIN),
        )
    }

    /// Top-left pixel of the caption text for image `index`
    pub const fn caption_origin(&self, index: usize) -> (u32, u32) {
        let (x, y) = self.cell_origin(index);
        (x, y + self.tile_size + CAPTION_GAP)
    }

    /// Largest size with the source aspect ratio that fits in one tile
    ///
    /// Landscape sources take the full tile width, everything else the full
    /// height; the other axis is floored and never drops below one pixel.
    pub fn fit_dimensions(&self, width: u32, height: u32) -> (u32, u32) {
        let tile = u64::from(self.tile_size);
        let (w, h) = (u64::from(width.max(1)), u64::from(height.max(1)));

        if w > h {
            (self.tile_size, ((tile * h / w) as u32).max(1))
        } else {
            (((tile * w / h) as u32).max(1), self.tile_size)
        }
    }

    /// Offset that centers a `width`×`height` image inside a tile
    pub const fn centering_offset(&self, width: u32, height: u32) -> (u32, u32) {
        (
            self.tile_size.saturating_sub(width) / 2,
            self.tile_size.saturating_sub(height) / 2,
        )
    }
}

// `count` cells of `cell` pixels separated and surrounded by the margin
fn span(count: u32, cell: u32) -> Option<u32> {
    count
        .checked_mul(cell)?
        .checked_add(count.checked_add(1)?.checked_mul(MARGIN)?)
}
