// Supersampled rendering: draw large, then resample down for smooth edges

use crate::canvas::Canvas;
use crate::error::{check_padding, check_size, GlyphError, Result};
use crate::glyph::{Glyph, GlyphParams};
use image::imageops::{self, FilterType};
use image::RgbaImage;

/// Draw `glyph` at `supersample` times `target_size` and resample the result
/// down to a `target_size` square with a Lanczos filter.
///
/// Pixel measurements in `params` are scaled by the same factor. Sizes and
/// padding are validated before anything is drawn.
pub fn render_at_scale(
    glyph: &dyn Glyph,
    target_size: u32,
    supersample: u32,
    params: &GlyphParams,
) -> Result<RgbaImage> {
    check_size("target size", target_size)?;
    check_size("supersample factor", supersample)?;
    check_padding(params.padding_for(glyph))?;

    let working = target_size.checked_mul(supersample).ok_or_else(|| {
        GlyphError::invalid_dimension(format!(
            "{}px at {}x overflows",
            target_size, supersample
        ))
    })?;

    tracing::debug!(
        glyph = glyph.name(),
        target_size,
        supersample,
        "rendering glyph"
    );

    let scaled = params.scaled(supersample);
    let mut canvas = Canvas::new(working, working, scaled.background)?;
    glyph.draw(&mut canvas, working, &scaled)?;

    let large = canvas.into_premultiplied();
    Ok(demultiply(resample_premultiplied(&large, target_size)))
}

/// Resize a straight-alpha image to a `size` x `size` square.
///
/// Filtering happens on premultiplied values so transparent pixels do not
/// bleed their color into antialiased edges.
pub fn downsample(image: &RgbaImage, size: u32) -> Result<RgbaImage> {
    check_size("target size", size)?;
    if image.dimensions() == (size, size) {
        return Ok(image.clone());
    }
    Ok(demultiply(resample_premultiplied(&premultiply(image), size)))
}

fn resample_premultiplied(image: &RgbaImage, size: u32) -> RgbaImage {
    if image.dimensions() == (size, size) {
        return image.clone();
    }
    imageops::resize(image, size, size, FilterType::Lanczos3)
}

fn premultiply(image: &RgbaImage) -> RgbaImage {
    let mut out = image.clone();
    for p in out.pixels_mut() {
        let a = p.0[3] as u32;
        for c in &mut p.0[..3] {
            *c = ((*c as u32 * a + 127) / 255) as u8;
        }
    }
    out
}

fn demultiply(mut image: RgbaImage) -> RgbaImage {
    for p in image.pixels_mut() {
        let a = p.0[3] as u32;
        if a == 0 {
            p.0 = [0, 0, 0, 0];
            continue;
        }
        for c in &mut p.0[..3] {
            // Lanczos ringing can push a channel past its alpha.
            let v = (*c as u32).min(a);
            *c = ((v * 255 + a / 2) / a) as u8;
        }
    }
    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::glyph::{DockGlyph, MenubarGlyph, TreeGlyph};

    #[test]
    fn test_zero_target_rejected() {
        let params = GlyphParams::new(Color::BLACK);
        let err = render_at_scale(&MenubarGlyph, 0, 4, &params).unwrap_err();
        assert!(matches!(err, GlyphError::InvalidDimension(_)));
    }

    #[test]
    fn test_bad_padding_rejected() {
        let params = GlyphParams::new(Color::BLACK).with_padding(0.5);
        assert!(matches!(
            render_at_scale(&MenubarGlyph, 32, 4, &params),
            Err(GlyphError::InvalidDimension(_))
        ));
    }

    #[test]
    fn test_output_has_target_size_and_soft_edges() {
        let params = GlyphParams::new(Color::BLACK);
        let image = render_at_scale(&DockGlyph::default(), 64, 4, &params).unwrap();
        assert_eq!(image.dimensions(), (64, 64));
        let partial = image.pixels().filter(|p| p.0[3] > 0 && p.0[3] < 255).count();
        assert!(partial > 0, "expected antialiased edge pixels");
    }

    #[test]
    fn test_white_edges_stay_white() {
        let image = render_at_scale(&TreeGlyph, 48, 4, &GlyphParams::new(Color::WHITE)).unwrap();
        for p in image.pixels().filter(|p| p.0[3] > 32) {
            assert!(p.0[0] > 240 && p.0[1] > 240 && p.0[2] > 240, "{:?}", p);
        }
    }

    #[test]
    fn test_background_fills_output() {
        let bg = Color::rgb(245, 245, 245);
        let params = GlyphParams::new(Color::BLACK).with_background(bg);
        let image = render_at_scale(&MenubarGlyph, 22, 8, &params).unwrap();
        let corner = image.get_pixel(0, 0).0;
        assert_eq!(corner[3], 255);
        assert!(corner[..3].iter().all(|c| c.abs_diff(245) <= 1), "{:?}", corner);
    }

    #[test]
    fn test_downsample_same_size_is_identity() {
        let mut image = RgbaImage::new(8, 8);
        image.put_pixel(3, 3, image::Rgba([10, 20, 30, 200]));
        assert_eq!(downsample(&image, 8).unwrap(), image);
        assert!(downsample(&image, 0).is_err());
    }

    #[test]
    fn test_premultiply_round_trip_on_opaque() {
        let mut image = RgbaImage::new(2, 1);
        image.put_pixel(0, 0, image::Rgba([12, 200, 99, 255]));
        assert_eq!(demultiply(premultiply(&image)), image);
    }
}
