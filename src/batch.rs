// Size lists and parallel batch rendering over (size, variant) pairs

use crate::color::Color;
use crate::error::Result;
use crate::glyph::{stroke_for_size, Glyph, GlyphParams};
use crate::render::render_at_scale;
use crate::trace::{light_variant, normalize};
use image::RgbaImage;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

// --- Size lists ---
pub const PREVIEW_SIZES: [u32; 5] = [64, 128, 256, 512, 1024];
pub const ICONSET_POINTS: [u32; 6] = [16, 32, 64, 128, 256, 512];
pub const MENUBAR_SIZES: [(&str, u32); 4] = [
    ("MenuBarIcon", 18),
    ("MenuBarIcon@2x", 36),
    ("MenuBarIcon-22", 22),
    ("MenuBarIcon-22@2x", 44),
];

/// Foreground color family of an output icon
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Black artwork for light backgrounds
    Dark,
    /// White artwork for dark backgrounds
    Light,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Dark, Variant::Light];

    pub fn color(&self) -> Color {
        match self {
            Variant::Dark => Color::BLACK,
            Variant::Light => Color::WHITE,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Variant::Dark => "dark",
            Variant::Light => "light",
        }
    }
}

/// One entry of a platform icon set: a point size at a display scale
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconSize {
    pub points: u32,
    pub scale: u32,
}

impl IconSize {
    pub fn pixels(&self) -> u32 {
        self.points * self.scale
    }

    /// `icon_32x32` or `icon_32x32@2x`
    pub fn iconset_name(&self) -> String {
        if self.scale == 1 {
            format!("icon_{0}x{0}", self.points)
        } else {
            format!("icon_{0}x{0}@{1}x", self.points, self.scale)
        }
    }
}

/// Every iconset entry at 1x and 2x
pub fn iconset_sizes() -> Vec<IconSize> {
    ICONSET_POINTS
        .iter()
        .flat_map(|&points| [1, 2].map(|scale| IconSize { points, scale }))
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderJob {
    pub size: u32,
    pub variant: Variant,
}

/// Cross product of `sizes` and `variants`, sizes outermost
pub fn jobs(sizes: &[u32], variants: &[Variant]) -> Vec<RenderJob> {
    sizes
        .iter()
        .flat_map(|&size| variants.iter().map(move |&variant| RenderJob { size, variant }))
        .collect()
}

pub struct RenderedIcon {
    pub size: u32,
    pub variant: Variant,
    pub image: RgbaImage,
}

/// How stroke-based designs pick a stroke width per output size
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum StrokeMode {
    /// Stepped widths from [`stroke_for_size`]
    #[default]
    Ladder,
    /// The same width in final pixels at every size
    Fixed(f32),
    /// Each design's own size-proportional default
    Proportional,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BatchOptions {
    pub supersample: u32,
    pub background: Option<Color>,
    pub padding_ratio: Option<f32>,
    pub stroke: StrokeMode,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            supersample: 4,
            background: None,
            padding_ratio: None,
            stroke: StrokeMode::default(),
        }
    }
}

impl BatchOptions {
    fn params(&self, glyph: &dyn Glyph, job: &RenderJob) -> GlyphParams {
        let mut params = GlyphParams::new(job.variant.color());
        params.background = self.background;
        params.padding_ratio = self.padding_ratio;
        if glyph.uses_stroke() {
            params.stroke_width = match self.stroke {
                StrokeMode::Ladder => Some(stroke_for_size(job.size)),
                StrokeMode::Fixed(w) => Some(w),
                StrokeMode::Proportional => None,
            };
        }
        params
    }
}

/// Render `glyph` for every job. Jobs share nothing, so they run in
/// parallel; the result keeps the order of `jobs`.
pub fn render_glyph_batch(
    glyph: &dyn Glyph,
    jobs: &[RenderJob],
    options: &BatchOptions,
) -> Result<Vec<RenderedIcon>> {
    tracing::debug!(glyph = glyph.name(), jobs = jobs.len(), "rendering batch");
    jobs.par_iter()
        .map(|job| {
            let params = options.params(glyph, job);
            let image = render_at_scale(glyph, job.size, options.supersample, &params)?;
            Ok(RenderedIcon {
                size: job.size,
                variant: job.variant,
                image,
            })
        })
        .collect()
}

/// Normalize a traced silhouette to each size, as a dark icon and its
/// light recolor. Output is ordered by size, dark before light.
pub fn traced_batch(
    traced: &RgbaImage,
    sizes: &[u32],
    padding_ratio: f32,
) -> Result<Vec<RenderedIcon>> {
    let per_size = sizes
        .par_iter()
        .map(|&size| {
            let dark = normalize(traced, size, padding_ratio)?;
            let light = light_variant(&dark);
            Ok([
                RenderedIcon {
                    size,
                    variant: Variant::Dark,
                    image: dark,
                },
                RenderedIcon {
                    size,
                    variant: Variant::Light,
                    image: light,
                },
            ])
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(per_size.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::{GroveGlyph, MenubarGlyph};

    #[test]
    fn test_iconset_sizes() {
        let sizes = iconset_sizes();
        assert_eq!(sizes.len(), 12);
        assert_eq!(sizes[0].iconset_name(), "icon_16x16");
        assert_eq!(sizes[1].iconset_name(), "icon_16x16@2x");
        assert_eq!(sizes[1].pixels(), 32);
        assert_eq!(sizes[11].pixels(), 1024);
    }

    #[test]
    fn test_jobs_cross_product() {
        let jobs = jobs(&[16, 32], &Variant::ALL);
        assert_eq!(jobs.len(), 4);
        assert_eq!(jobs[1], RenderJob { size: 16, variant: Variant::Light });
        assert_eq!(jobs[2].size, 32);
    }

    #[test]
    fn test_batch_preserves_job_order() {
        let jobs = jobs(&[22, 18, 44], &Variant::ALL);
        let icons = render_glyph_batch(&MenubarGlyph, &jobs, &BatchOptions::default()).unwrap();
        assert_eq!(icons.len(), jobs.len());
        for (icon, job) in icons.iter().zip(&jobs) {
            assert_eq!(icon.size, job.size);
            assert_eq!(icon.variant, job.variant);
            assert_eq!(icon.image.dimensions(), (job.size, job.size));
        }
    }

    #[test]
    fn test_stroke_mode_only_for_stroke_designs() {
        let job = RenderJob { size: 128, variant: Variant::Dark };
        let options = BatchOptions::default();
        assert_eq!(options.params(&GroveGlyph, &job).stroke_width, Some(6.0));
        assert_eq!(options.params(&MenubarGlyph, &job).stroke_width, None);
        let fixed = BatchOptions { stroke: StrokeMode::Fixed(3.0), ..options };
        assert_eq!(fixed.params(&GroveGlyph, &job).stroke_width, Some(3.0));
    }

    #[test]
    fn test_traced_batch_pairs_variants() {
        let mut traced = RgbaImage::new(40, 40);
        for y in 10..30 {
            for x in 5..35 {
                traced.put_pixel(x, y, image::Rgba([0, 0, 0, 255]));
            }
        }
        let icons = traced_batch(&traced, &[16, 32], 0.08).unwrap();
        assert_eq!(icons.len(), 4);
        assert_eq!((icons[0].size, icons[0].variant), (16, Variant::Dark));
        assert_eq!((icons[1].size, icons[1].variant), (16, Variant::Light));
        for (d, l) in icons[2].image.pixels().zip(icons[3].image.pixels()) {
            assert_eq!(d.0[3], l.0[3]);
        }
    }
}
