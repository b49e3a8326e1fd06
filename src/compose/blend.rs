//! Source-over alpha compositing in integer arithmetic
//!
//! An opaque destination stays exactly opaque whatever the source alpha.

use image::{Rgba, RgbaImage};

const MAX: u32 = 255;

/// Composite `src` over `dst` in place
pub fn over(dst: &mut Rgba<u8>, src: Rgba<u8>) {
    let src_alpha = u32::from(src.0[3]);
    if src_alpha == MAX {
        *dst = src;
        return;
    }
    if src_alpha == 0 {
        return;
    }

    // Coverage of the destination left visible, scaled by 255
    let dst_weight = u32::from(dst.0[3]) * (MAX - src_alpha);
    let src_weight = src_alpha * MAX;
    let total = src_weight + dst_weight;

    for (out, &top) in dst.0.iter_mut().zip(&src.0).take(3) {
        let blended = u32::from(top) * src_weight + u32::from(*out) * dst_weight;
        *out = to_channel((blended + total / 2) / total);
    }
    dst.0[3] = to_channel((total + MAX / 2) / MAX);
}

/// Composite every pixel of `top` over `canvas` with its top-left corner at `(x, y)`
///
/// Pixels falling outside the canvas are skipped.
pub fn over_image(canvas: &mut RgbaImage, top: &RgbaImage, x: u32, y: u32) {
    for (dx, dy, pixel) in top.enumerate_pixels() {
        let (Some(px), Some(py)) = (x.checked_add(dx), y.checked_add(dy)) else {
            continue;
        };
        if let Some(target) = canvas.get_pixel_mut_checked(px, py) {
            over(target, *pixel);
        }
    }
}

fn to_channel(value: u32) -> u8 {
    u8::try_from(value).unwrap_or(u8::MAX)
}
