use super::bbox::BoundingBox;
use crate::color::Color;
use image::{DynamicImage, GrayImage, Luma, RgbaImage};
use serde::{Deserialize, Serialize};

/// Luminance cutoff matching the historical reference asset
pub const DEFAULT_THRESHOLD: u8 = 128;

/// Which side of the threshold counts as foreground
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Polarity {
    /// Dark artwork on a light background: luminance below the threshold
    #[default]
    DarkOnLight,
    /// Light artwork on a dark background: luminance at or above the threshold
    LightOnDark,
}

/// ITU-R 601-2 luma of each pixel, ignoring alpha
pub fn luminance(image: &DynamicImage) -> GrayImage {
    let rgba = image.to_rgba8();
    let mut gray = GrayImage::new(rgba.width(), rgba.height());
    for (dst, src) in gray.pixels_mut().zip(rgba.pixels()) {
        let [r, g, b, _] = src.0;
        // 16.16 fixed point, rounded
        let l = (r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000) >> 16;
        *dst = Luma([l as u8]);
    }
    gray
}

/// Binary foreground mask; 255 marks foreground, 0 background
#[derive(Clone, Debug, PartialEq)]
pub struct Mask {
    pixels: GrayImage,
}

impl Mask {
    pub fn from_luma(gray: &GrayImage, threshold: u8, polarity: Polarity) -> Self {
        let mut pixels = GrayImage::new(gray.width(), gray.height());
        for (dst, src) in pixels.pixels_mut().zip(gray.pixels()) {
            let foreground = match polarity {
                Polarity::DarkOnLight => src.0[0] < threshold,
                Polarity::LightOnDark => src.0[0] >= threshold,
            };
            *dst = Luma([if foreground { 255 } else { 0 }]);
        }
        Self { pixels }
    }

    pub fn from_image(image: &DynamicImage, threshold: u8, polarity: Polarity) -> Self {
        Self::from_luma(&luminance(image), threshold, polarity)
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn is_foreground(&self, x: u32, y: u32) -> bool {
        self.pixels.get_pixel(x, y).0[0] == 255
    }

    pub fn foreground_count(&self) -> usize {
        self.pixels.pixels().filter(|p| p.0[0] == 255).count()
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::scan(self.width(), self.height(), |x, y| self.is_foreground(x, y))
    }

    /// Foreground painted opaque `color`, everything else transparent
    pub fn to_silhouette(&self, color: Color) -> RgbaImage {
        let mut out = RgbaImage::new(self.width(), self.height());
        for (dst, src) in out.pixels_mut().zip(self.pixels.pixels()) {
            if src.0[0] == 255 {
                *dst = image::Rgba([color.r, color.g, color.b, 255]);
            }
        }
        out
    }
}
