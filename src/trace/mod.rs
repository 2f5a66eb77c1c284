//! Derives a clean, padded icon from existing reference artwork.
//!
//! The reference is reduced to luminance, thresholded into a [`Mask`], and
//! the mask's content is cropped, centred with uniform padding and
//! resampled to the requested size.

mod bbox;
mod mask;
mod normalize;
mod remap;
mod source;

pub use bbox::BoundingBox;
pub use mask::{luminance, Mask, Polarity, DEFAULT_THRESHOLD};
pub use normalize::{normalize, padded_side};
pub use remap::{dark_variant, light_variant, recolor};
pub use source::{load_reference, SourceRegion, SVG_RASTER_SIZE};

use crate::color::Color;
use crate::error::Result;
use image::{DynamicImage, RgbaImage};

/// Thresholding settings for a reference image
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tracer {
    pub threshold: u8,
    pub polarity: Polarity,
    pub region: SourceRegion,
}

impl Default for Tracer {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            polarity: Polarity::DarkOnLight,
            region: SourceRegion::Full,
        }
    }
}

impl Tracer {
    pub fn mask(&self, source: &DynamicImage) -> Mask {
        let region = self.region.crop(source);
        Mask::from_image(&region, self.threshold, self.polarity)
    }

    /// Full-resolution black silhouette of the reference artwork
    pub fn trace(&self, source: &DynamicImage) -> RgbaImage {
        let mask = self.mask(source);
        tracing::debug!(
            width = mask.width(),
            height = mask.height(),
            foreground = mask.foreground_count(),
            threshold = self.threshold,
            "traced reference"
        );
        mask.to_silhouette(Color::BLACK)
    }

    pub fn trace_and_normalize(
        &self,
        source: &DynamicImage,
        target_size: u32,
        padding_ratio: f32,
    ) -> Result<RgbaImage> {
        normalize(&self.trace(source), target_size, padding_ratio)
    }
}

/// Trace `source` with the default threshold and normalize the result
pub fn trace_and_normalize(
    source: &DynamicImage,
    target_size: u32,
    padding_ratio: f32,
) -> Result<RgbaImage> {
    Tracer::default().trace_and_normalize(source, target_size, padding_ratio)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GlyphError;
    use image::Rgb;

    #[test]
    fn test_all_white_gives_transparent_canvas() {
        let white = image::RgbImage::from_pixel(50, 40, Rgb([255, 255, 255]));
        let white = DynamicImage::ImageRgb8(white);
        let out = trace_and_normalize(&white, 32, 0.08).unwrap();
        assert_eq!(out.dimensions(), (32, 32));
        assert!(out.pixels().all(|p| p.0[3] == 0));
    }

    #[test]
    fn test_left_half_ignores_right_artwork() {
        let mut img = image::RgbImage::from_pixel(100, 50, Rgb([250, 250, 250]));
        for y in 10..20 {
            for x in 60..70 {
                img.put_pixel(x, y, Rgb([0, 0, 0]));
            }
        }
        let source = DynamicImage::ImageRgb8(img);
        let tracer = Tracer {
            region: SourceRegion::LeftHalf,
            ..Tracer::default()
        };
        assert_eq!(tracer.mask(&source).bounding_box(), None);
        let full = Tracer::default().mask(&source).bounding_box().unwrap();
        assert_eq!((full.min_x, full.max_x), (60, 69));
    }

    #[test]
    fn test_threshold_parameter() {
        let gray = DynamicImage::ImageRgb8(image::RgbImage::from_pixel(4, 4, Rgb([150; 3])));
        assert_eq!(Tracer::default().mask(&gray).foreground_count(), 0);
        let lenient = Tracer {
            threshold: 200,
            ..Tracer::default()
        };
        assert_eq!(lenient.mask(&gray).foreground_count(), 16);
    }

    #[test]
    fn test_bad_padding_is_invalid_dimension() {
        let white = DynamicImage::ImageRgb8(image::RgbImage::new(8, 8));
        assert!(matches!(
            trace_and_normalize(&white, 16, 0.5),
            Err(GlyphError::InvalidDimension(_))
        ));
    }
}
