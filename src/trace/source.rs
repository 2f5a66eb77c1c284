// Loading of reference artwork for the tracer

use crate::error::{GlyphError, Result};
use image::DynamicImage;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Longest side, in pixels, that SVG references are rasterized to
pub const SVG_RASTER_SIZE: u32 = 1024;

/// Part of the reference image that holds the artwork to trace
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceRegion {
    #[default]
    Full,
    /// Left half, for sheets showing two variants side by side
    LeftHalf,
    RightHalf,
}

impl SourceRegion {
    pub fn crop(&self, image: &DynamicImage) -> DynamicImage {
        let (w, h) = (image.width(), image.height());
        match self {
            SourceRegion::Full => image.clone(),
            SourceRegion::LeftHalf => image.crop_imm(0, 0, w / 2, h),
            SourceRegion::RightHalf => image.crop_imm(w / 2, 0, w - w / 2, h),
        }
    }
}

/// Open a reference bitmap. `.svg` files are rasterized onto white so that
/// transparent areas read as background.
pub fn load_reference(path: &Path) -> Result<DynamicImage> {
    let is_svg = path
        .extension()
        .map(|e| e.to_string_lossy().eq_ignore_ascii_case("svg"))
        .unwrap_or(false);

    let unreadable = |message: String| GlyphError::UnreadableSource {
        path: path.to_path_buf(),
        message,
    };

    let image = if is_svg {
        let data = fs::read(path).map_err(|e| unreadable(e.to_string()))?;
        rasterize_svg(&data).map_err(unreadable)?
    } else {
        image::open(path).map_err(|e| unreadable(e.to_string()))?
    };

    tracing::debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "loaded reference"
    );
    Ok(image)
}

fn rasterize_svg(data: &[u8]) -> std::result::Result<DynamicImage, String> {
    let tree = usvg::Tree::from_data(data, &usvg::Options::default()).map_err(|e| e.to_string())?;

    let size = tree.size();
    let scale = SVG_RASTER_SIZE as f32 / size.width().max(size.height());
    let width = (size.width() * scale).round().max(1.0) as u32;
    let height = (size.height() * scale).round().max(1.0) as u32;

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| format!("cannot allocate {}x{} raster", width, height))?;
    pixmap.fill(tiny_skia::Color::WHITE);
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    // Opaque after the white fill, so premultiplied equals straight alpha.
    image::RgbaImage::from_raw(width, height, pixmap.take())
        .map(DynamicImage::ImageRgba8)
        .ok_or_else(|| "raster buffer size mismatch".to_string())
}
