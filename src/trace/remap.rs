// Recoloring of traced silhouettes; coverage (alpha) is never touched

use crate::color::Color;
use image::RgbaImage;

/// Copy of `image` whose covered pixels take `color`'s RGB. Alpha is kept
/// exactly; fully transparent pixels are zeroed.
pub fn recolor(image: &RgbaImage, color: Color) -> RgbaImage {
    let mut out = image.clone();
    for p in out.pixels_mut() {
        let a = p.0[3];
        p.0 = if a > 0 {
            [color.r, color.g, color.b, a]
        } else {
            [0, 0, 0, 0]
        };
    }
    out
}

/// White artwork for dark backgrounds
pub fn light_variant(image: &RgbaImage) -> RgbaImage {
    recolor(image, Color::WHITE)
}

/// Black artwork for light backgrounds
pub fn dark_variant(image: &RgbaImage) -> RgbaImage {
    recolor(image, Color::BLACK)
}
