use super::bbox::BoundingBox;
use crate::error::{check_padding, check_size, Result};
use crate::render::downsample;
use image::imageops;
use image::RgbaImage;

/// Crop `image` to its visible content, centre it on a transparent square
/// leaving `padding_ratio` of the side clear on each edge, and resample to
/// `target_size`.
///
/// An image with no visible pixels yields a transparent `target_size` square.
pub fn normalize(image: &RgbaImage, target_size: u32, padding_ratio: f32) -> Result<RgbaImage> {
    check_size("target size", target_size)?;
    check_padding(padding_ratio)?;

    let Some(bbox) = BoundingBox::of_alpha(image) else {
        tracing::debug!(target_size, "empty trace, returning transparent canvas");
        return Ok(RgbaImage::new(target_size, target_size));
    };

    let cropped =
        imageops::crop_imm(image, bbox.min_x, bbox.min_y, bbox.width(), bbox.height()).to_image();
    let padded = pad_square(&cropped, padding_ratio);
    downsample(&padded, target_size)
}

const SIDE_EPSILON: f64 = 1e-6;

/// Side of the square that leaves `padding_ratio` clear around `content`
///
/// Quotients within `SIDE_EPSILON` below an integer snap up to it, so the
/// `f32` rounding of ratios like 0.08 does not lose a pixel.
pub fn padded_side(content: u32, padding_ratio: f32) -> u32 {
    let exact = content as f64 / (1.0 - 2.0 * padding_ratio as f64);
    let side = (exact + SIDE_EPSILON).floor() as u32;
    side.max(content)
}

fn pad_square(content: &RgbaImage, padding_ratio: f32) -> RgbaImage {
    let (cw, ch) = content.dimensions();
    let side = padded_side(cw.max(ch), padding_ratio);
    let mut canvas = RgbaImage::new(side, side);
    let x = (side - cw) / 2;
    let y = (side - ch) / 2;
    imageops::replace(&mut canvas, content, x as i64, y as i64);
    canvas
}
