//! Canvas composition: resize, center, blend and caption every tile

use crate::compose::blend;
use crate::compose::caption::CaptionFont;
use crate::io::error::{Result, invalid_parameter};
use crate::io::loader::LoadedImage;
use crate::layout::grid::GridLayout;
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

/// Colors and font used when drawing the collage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollageStyle {
    /// Canvas fill behind tiles and captions
    pub background: Rgba<u8>,
    /// Caption text color
    pub caption_color: Rgba<u8>,
    /// Caption font metrics
    pub font: CaptionFont,
}

impl Default for CollageStyle {
    fn default() -> Self {
        Self {
            background: Rgba([255, 255, 255, 255]),
            caption_color: Rgba([0, 0, 0, 255]),
            font: CaptionFont::default(),
        }
    }
}

/// Where one source image ended up on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilePlacement {
    /// Position in the row-major grid
    pub index: usize,
    /// Left edge of the resized image
    pub x: u32,
    /// Top edge of the resized image
    pub y: u32,
    /// Resized width
    pub width: u32,
    /// Resized height
    pub height: u32,
}

/// A finished canvas and the placement of every tile on it
#[derive(Debug, Clone)]
pub struct Collage {
    /// Composed pixels
    pub canvas: RgbaImage,
    /// One entry per composited image, in grid order
    pub placements: Vec<TilePlacement>,
}

/// Lay `images` out on a fresh canvas in row-major order
///
/// Each image is resized with Lanczos3 to fit its tile, centered, alpha-blended
/// over the background and captioned with its name. `on_tile` is called with
/// the index of every tile once it is drawn.
///
/// # Errors
///
/// Returns an error unless there is exactly one image per grid cell
pub fn compose_collage(
    layout: &GridLayout,
    images: &[LoadedImage],
    style: &CollageStyle,
    mut on_tile: impl FnMut(usize),
) -> Result<Collage> {
    if images.len() != layout.cell_count() {
        return Err(invalid_parameter(
            "images",
            &images.len(),
            &format!("grid needs exactly {} images", layout.cell_count()),
        ));
    }

    let mut canvas = RgbaImage::from_pixel(
        layout.canvas_width(),
        layout.canvas_height(),
        style.background,
    );
    let mut placements = Vec::with_capacity(images.len());

    for (index, loaded) in images.iter().enumerate() {
        let placement = draw_tile(&mut canvas, layout, index, &loaded.image);

        let (caption_x, caption_top) = layout.caption_origin(index);
        style.font.draw_text(
            &mut canvas,
            caption_x,
            caption_top + style.font.ascent(),
            &loaded.name,
            style.caption_color,
        );

        tracing::trace!(
            index,
            name = %loaded.name,
            width = placement.width,
            height = placement.height,
            "placed tile"
        );
        placements.push(placement);
        on_tile(index);
    }

    Ok(Collage { canvas, placements })
}

fn draw_tile(
    canvas: &mut RgbaImage,
    layout: &GridLayout,
    index: usize,
    source: &RgbaImage,
) -> TilePlacement {
    let (width, height) = layout.fit_dimensions(source.width(), source.height());
    let resized = imageops::resize(source, width, height, FilterType::Lanczos3);

    let (cell_x, cell_y) = layout.cell_origin(index);
    let (offset_x, offset_y) = layout.centering_offset(width, height);
    let (x, y) = (cell_x + offset_x, cell_y + offset_y);

    blend::over_image(canvas, &resized, x, y);

    TilePlacement {
        index,
        x,
        y,
        width,
        height,
    }
}
