//! Shape rasterization
//!
//! Hard-edged fills onto an RGBA canvas. Fills replace the pixel value
//! outright (no alpha blending), so a semi-transparent fill leaves a
//! semi-transparent pixel behind.

use image::{Rgba as Pixel, RgbaImage};

use super::layout::Rect;
use super::palette::Rgba;

/// Allocate a fully transparent square canvas
pub fn transparent_canvas(size: u32) -> RgbaImage {
    RgbaImage::from_pixel(size, size, Pixel(Rgba::TRANSPARENT.to_array()))
}

/// Fill an inclusive rectangle, clipped to the canvas
pub fn fill_rect(canvas: &mut RgbaImage, rect: Rect, color: Rgba) {
    let Some((x_range, y_range)) = clip(canvas, rect) else {
        return;
    };

    for y in y_range {
        for x in x_range.clone() {
            canvas.put_pixel(x, y, Pixel(color.to_array()));
        }
    }
}

/// Fill the ellipse inscribed in `rect`, clipped to the canvas
///
/// The box covers the continuous region `[x0, x1 + 1) x [y0, y1 + 1)`; a
/// pixel is painted when its center lies inside or on the ellipse.
pub fn fill_ellipse(canvas: &mut RgbaImage, rect: Rect, color: Rgba) {
    let rx = rect.width() as f32 / 2.0;
    let ry = rect.height() as f32 / 2.0;
    if rx <= 0.0 || ry <= 0.0 {
        return;
    }

    let Some((x_range, y_range)) = clip(canvas, rect) else {
        return;
    };
    let (cx, cy) = rect.center();

    for y in y_range {
        let dy = (y as f32 + 0.5 - cy) / ry;
        for x in x_range.clone() {
            let dx = (x as f32 + 0.5 - cx) / rx;
            if dx * dx + dy * dy <= 1.0 {
                canvas.put_pixel(x, y, Pixel(color.to_array()));
            }
        }
    }
}

/// Read a pixel back as an `Rgba`
#[cfg(test)]
pub fn pixel_at(canvas: &RgbaImage, x: u32, y: u32) -> Rgba {
    Rgba::from(canvas.get_pixel(x, y).0)
}

fn clip(
    canvas: &RgbaImage,
    rect: Rect,
) -> Option<(std::ops::Range<u32>, std::ops::Range<u32>)> {
    let x0 = rect.x0.max(0);
    let y0 = rect.y0.max(0);
    let x1 = rect.x1.min(canvas.width() as i32 - 1);
    let y1 = rect.y1.min(canvas.height() as i32 - 1);

    if x0 > x1 || y0 > y1 {
        return None;
    }

    Some((x0 as u32..x1 as u32 + 1, y0 as u32..y1 as u32 + 1))
}
